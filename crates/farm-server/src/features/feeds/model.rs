//! Feed record row and its filterable columns
//!
//! A feed is linked to livestock through `livestock.feed_id`; the column
//! list below folds those links into `livestock_ids`.

use chrono::{DateTime, NaiveDate, Utc};
use farm_common::filter::{ColumnKind, ColumnSet, ColumnSpec, EntitySchema};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Feed {
    pub id: Uuid,
    pub feed_type: String,
    pub quantity: f64,
    pub feeding_date: NaiveDate,
    pub cost: f64,
    pub note: Option<String>,
    /// Livestock currently on this feed, oldest first
    pub livestock_ids: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub const FEED_COLUMNS: &str = "id, feed_type, quantity::FLOAT8 AS quantity, feeding_date, \
     cost::FLOAT8 AS cost, note, \
     ARRAY(SELECT l.id FROM livestock l WHERE l.feed_id = feeds.id ORDER BY l.created_at) AS livestock_ids, \
     created_at, updated_at";

const FEED_FIELDS: &[ColumnSpec] = &[
    ColumnSpec::new("id", ColumnKind::Uuid),
    ColumnSpec::new("feed_type", ColumnKind::Text),
    ColumnSpec::new("quantity", ColumnKind::Decimal),
    ColumnSpec::new("feeding_date", ColumnKind::Date),
    ColumnSpec::new("cost", ColumnKind::Decimal),
    ColumnSpec::new("note", ColumnKind::Text),
    ColumnSpec::new("created_at", ColumnKind::Timestamp),
    ColumnSpec::new("updated_at", ColumnKind::Timestamp),
];

pub const FEED_SCHEMA: EntitySchema =
    EntitySchema::new("feeds", "feeds", ColumnSet::new(FEED_FIELDS));

pub fn select_feeds() -> String {
    format!("SELECT {} FROM feeds", FEED_COLUMNS)
}
