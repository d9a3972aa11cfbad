//! Medication record row and its filterable columns
//!
//! Treated animals live in `medication_livestock`; the column list folds
//! them into `livestock_ids`.

use chrono::{DateTime, NaiveDate, Utc};
use farm_common::filter::{ColumnKind, ColumnSet, ColumnSpec, EntitySchema};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Medication {
    pub id: Uuid,
    pub date: NaiveDate,
    pub brand: String,
    pub medication_brand: String,
    pub name: String,
    pub dosage: Option<String>,
    pub method: Option<String>,
    pub administered_by: Option<String>,
    pub cost: Option<f64>,
    pub additional_cost: Option<f64>,
    pub next_vaccination_date: Option<NaiveDate>,
    pub notes: Option<String>,
    pub livestock_ids: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub const MEDICATION_COLUMNS: &str = "id, date, brand, medication_brand, name, dosage, method, \
     administered_by, cost::FLOAT8 AS cost, additional_cost::FLOAT8 AS additional_cost, \
     next_vaccination_date, notes, \
     ARRAY(SELECT ml.livestock_id FROM medication_livestock ml WHERE ml.medication_id = medications.id ORDER BY ml.livestock_id) AS livestock_ids, \
     created_at, updated_at";

const MEDICATION_FIELDS: &[ColumnSpec] = &[
    ColumnSpec::new("id", ColumnKind::Uuid),
    ColumnSpec::new("date", ColumnKind::Date),
    ColumnSpec::new("brand", ColumnKind::Text),
    ColumnSpec::new("medication_brand", ColumnKind::Text),
    ColumnSpec::new("name", ColumnKind::Text),
    ColumnSpec::new("dosage", ColumnKind::Text),
    ColumnSpec::new("method", ColumnKind::Text),
    ColumnSpec::new("administered_by", ColumnKind::Text),
    ColumnSpec::new("cost", ColumnKind::Decimal),
    ColumnSpec::new("additional_cost", ColumnKind::Decimal),
    ColumnSpec::new("next_vaccination_date", ColumnKind::Date),
    ColumnSpec::new("notes", ColumnKind::Text),
    ColumnSpec::new("created_at", ColumnKind::Timestamp),
    ColumnSpec::new("updated_at", ColumnKind::Timestamp),
];

pub const MEDICATION_SCHEMA: EntitySchema =
    EntitySchema::new("medications", "medications", ColumnSet::new(MEDICATION_FIELDS));

pub fn select_medications() -> String {
    format!("SELECT {} FROM medications", MEDICATION_COLUMNS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::shared::test_helpers::assert_columns_selected;

    #[test]
    fn test_filterable_columns_are_selected() {
        assert_columns_selected(&MEDICATION_SCHEMA, MEDICATION_COLUMNS);
    }
}
