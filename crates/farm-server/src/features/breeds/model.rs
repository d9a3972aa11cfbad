//! Breeding record row and its filterable columns

use chrono::{DateTime, NaiveDate, Utc};
use farm_common::filter::{ColumnKind, ColumnSet, ColumnSpec, EntitySchema};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Breed {
    pub id: Uuid,
    pub breeding_date: NaiveDate,
    pub breeding_method: String,
    pub breeding_cost: f64,
    pub pre_breeding_health: String,
    pub treatment: String,
    pub estrus_detection_date: NaiveDate,
    pub estrus_cycle_length: String,
    pub check_date: NaiveDate,
    pub status: String,
    pub estimated_due_date: NaiveDate,
    pub result_of_breeding: String,
    pub number_of_offspring: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub const BREED_COLUMNS: &str = "id, breeding_date, breeding_method, \
     breeding_cost::FLOAT8 AS breeding_cost, pre_breeding_health, treatment, \
     estrus_detection_date, estrus_cycle_length, check_date, status, estimated_due_date, \
     result_of_breeding, number_of_offspring, created_at, updated_at";

const BREED_FIELDS: &[ColumnSpec] = &[
    ColumnSpec::new("id", ColumnKind::Uuid),
    ColumnSpec::new("breeding_date", ColumnKind::Date),
    ColumnSpec::new("breeding_method", ColumnKind::Text),
    ColumnSpec::new("breeding_cost", ColumnKind::Decimal),
    ColumnSpec::new("pre_breeding_health", ColumnKind::Text),
    ColumnSpec::new("treatment", ColumnKind::Text),
    ColumnSpec::new("estrus_detection_date", ColumnKind::Date),
    ColumnSpec::new("estrus_cycle_length", ColumnKind::Text),
    ColumnSpec::new("check_date", ColumnKind::Date),
    ColumnSpec::new("status", ColumnKind::Text),
    ColumnSpec::new("estimated_due_date", ColumnKind::Date),
    ColumnSpec::new("result_of_breeding", ColumnKind::Text),
    ColumnSpec::new("number_of_offspring", ColumnKind::Integer),
    ColumnSpec::new("created_at", ColumnKind::Timestamp),
    ColumnSpec::new("updated_at", ColumnKind::Timestamp),
];

pub const BREED_SCHEMA: EntitySchema =
    EntitySchema::new("breeds", "breeds", ColumnSet::new(BREED_FIELDS));

pub fn select_breeds() -> String {
    format!("SELECT {} FROM breeds", BREED_COLUMNS)
}
