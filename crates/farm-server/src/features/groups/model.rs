//! Group row and its filterable columns

use chrono::{DateTime, Utc};
use farm_common::filter::{ColumnKind, ColumnSet, ColumnSpec, EntitySchema};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Group {
    pub id: Uuid,
    pub group_name: String,
    pub group_id_number: String,
    pub number_of_livestock: i32,
    pub remarks: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Column list shared by SELECT and RETURNING
pub const GROUP_COLUMNS: &str =
    "id, group_name, group_id_number, number_of_livestock, remarks, created_at, updated_at";

const GROUP_FIELDS: &[ColumnSpec] = &[
    ColumnSpec::new("id", ColumnKind::Uuid),
    ColumnSpec::new("group_name", ColumnKind::Text),
    ColumnSpec::new("group_id_number", ColumnKind::Text),
    ColumnSpec::new("number_of_livestock", ColumnKind::Integer),
    ColumnSpec::new("remarks", ColumnKind::Text),
    ColumnSpec::new("created_at", ColumnKind::Timestamp),
    ColumnSpec::new("updated_at", ColumnKind::Timestamp),
];

pub const GROUP_SCHEMA: EntitySchema =
    EntitySchema::new("groups", "groups", ColumnSet::new(GROUP_FIELDS));

pub fn select_groups() -> String {
    format!("SELECT {} FROM groups", GROUP_COLUMNS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::shared::test_helpers::assert_columns_selected;

    #[test]
    fn test_filterable_columns_are_selected() {
        assert_columns_selected(&GROUP_SCHEMA, GROUP_COLUMNS);
    }
}
