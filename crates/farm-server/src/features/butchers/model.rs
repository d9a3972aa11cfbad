//! Butcher record row and its filterable columns

use chrono::{DateTime, NaiveDate, Utc};
use farm_common::filter::{ColumnKind, ColumnSet, ColumnSpec, EntitySchema};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use uuid::Uuid;

use crate::features::{livestock::model::Livestock, shared::embed};

/// Slaughter record for one animal
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Butcher {
    pub id: Uuid,
    pub name: String,
    pub breed: String,
    pub sex: String,
    pub internal_id: String,
    pub status: String,
    pub date: NaiveDate,
    pub cause: Option<String>,
    pub livestock_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub livestock: Option<Json<Livestock>>,
}

pub const BUTCHER_COLUMNS: &str = "id, name, breed, sex, internal_id, status, date, cause, \
     livestock_id, created_at, updated_at";

const BUTCHER_FIELDS: &[ColumnSpec] = &[
    ColumnSpec::new("id", ColumnKind::Uuid),
    ColumnSpec::new("name", ColumnKind::Text),
    ColumnSpec::new("breed", ColumnKind::Text),
    ColumnSpec::new("sex", ColumnKind::Text),
    ColumnSpec::new("internal_id", ColumnKind::Text),
    ColumnSpec::new("status", ColumnKind::Text),
    ColumnSpec::new("date", ColumnKind::Date),
    ColumnSpec::new("cause", ColumnKind::Text),
    ColumnSpec::new("livestock_id", ColumnKind::Uuid),
    ColumnSpec::new("created_at", ColumnKind::Timestamp),
    ColumnSpec::new("updated_at", ColumnKind::Timestamp),
];

pub const BUTCHER_SCHEMA: EntitySchema =
    EntitySchema::new("butchers", "butchers", ColumnSet::new(BUTCHER_FIELDS));

pub fn butcher_columns() -> String {
    format!(
        "{}, {} AS livestock",
        BUTCHER_COLUMNS,
        embed::livestock("butchers.livestock_id")
    )
}

pub fn select_butchers() -> String {
    format!("SELECT {} FROM butchers", butcher_columns())
}
