//! Livestock row and its filterable columns

use chrono::{DateTime, NaiveDate, Utc};
use farm_common::filter::{ColumnKind, ColumnSet, ColumnSpec, EntitySchema};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use uuid::Uuid;

use crate::features::{feeds::model::Feed, shared::embed};

/// A single animal
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Livestock {
    pub id: Uuid,
    pub name: String,
    pub breed: String,
    pub sex: String,
    pub internal_id: Uuid,
    pub status: String,
    pub skin_color: String,
    pub neutered: String,
    pub is_breeding_stock: bool,
    pub weight: f64,
    pub description: String,
    pub tag_number: Uuid,
    pub tag_color: String,
    pub tag_location: String,
    pub birth_date: NaiveDate,
    pub birth_weight: f64,
    pub age_to_wean: i32,
    pub date_weaned: Option<NaiveDate>,
    pub origin: String,
    pub sire: Option<Uuid>,
    pub dam: Option<Uuid>,
    /// Feed currently assigned through the feeds resource
    pub feed_id: Option<Uuid>,
    #[serde(default)]
    pub feed: Option<Json<Feed>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Column list shared by SELECT and RETURNING. Decimals are read as FLOAT8.
pub const LIVESTOCK_COLUMNS: &str = "id, name, breed, sex, internal_id, status, skin_color, \
     neutered, is_breeding_stock, weight::FLOAT8 AS weight, description, tag_number, tag_color, \
     tag_location, birth_date, birth_weight::FLOAT8 AS birth_weight, age_to_wean, date_weaned, \
     origin, sire, dam, feed_id, created_at, updated_at";

const LIVESTOCK_FIELDS: &[ColumnSpec] = &[
    ColumnSpec::new("id", ColumnKind::Uuid),
    ColumnSpec::new("name", ColumnKind::Text),
    ColumnSpec::new("breed", ColumnKind::Text),
    ColumnSpec::new("sex", ColumnKind::Text),
    ColumnSpec::new("internal_id", ColumnKind::Uuid),
    ColumnSpec::new("status", ColumnKind::Text),
    ColumnSpec::new("skin_color", ColumnKind::Text),
    ColumnSpec::new("neutered", ColumnKind::Text),
    ColumnSpec::new("is_breeding_stock", ColumnKind::Boolean),
    ColumnSpec::new("weight", ColumnKind::Decimal),
    ColumnSpec::new("description", ColumnKind::Text),
    ColumnSpec::new("tag_number", ColumnKind::Uuid),
    ColumnSpec::new("tag_color", ColumnKind::Text),
    ColumnSpec::new("tag_location", ColumnKind::Text),
    ColumnSpec::new("birth_date", ColumnKind::Date),
    ColumnSpec::new("birth_weight", ColumnKind::Decimal),
    ColumnSpec::new("age_to_wean", ColumnKind::Integer),
    ColumnSpec::new("date_weaned", ColumnKind::Date),
    ColumnSpec::new("origin", ColumnKind::Text),
    ColumnSpec::new("sire", ColumnKind::Uuid),
    ColumnSpec::new("dam", ColumnKind::Uuid),
    ColumnSpec::new("feed_id", ColumnKind::Uuid),
    ColumnSpec::new("created_at", ColumnKind::Timestamp),
    ColumnSpec::new("updated_at", ColumnKind::Timestamp),
];

pub const LIVESTOCK_SCHEMA: EntitySchema =
    EntitySchema::new("livestock", "livestock", ColumnSet::new(LIVESTOCK_FIELDS));

/// [`LIVESTOCK_COLUMNS`] plus the assigned feed, for SELECT and RETURNING
pub fn livestock_columns() -> String {
    format!(
        "{}, {} AS feed",
        LIVESTOCK_COLUMNS,
        embed::feed("livestock.feed_id")
    )
}

pub fn select_livestock() -> String {
    format!("SELECT {} FROM livestock", livestock_columns())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::shared::test_helpers::assert_columns_selected;

    #[test]
    fn test_filterable_columns_are_selected() {
        assert_columns_selected(&LIVESTOCK_SCHEMA, LIVESTOCK_COLUMNS);
    }

    #[test]
    fn test_decimals_are_cast() {
        assert!(LIVESTOCK_COLUMNS.contains("weight::FLOAT8 AS weight"));
        assert!(LIVESTOCK_COLUMNS.contains("birth_weight::FLOAT8 AS birth_weight"));
    }
}
