//! Sale record row and its filterable columns

use chrono::{DateTime, NaiveDate, Utc};
use farm_common::filter::{ColumnKind, ColumnSet, ColumnSpec, EntitySchema};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use uuid::Uuid;

use crate::features::{contacts::model::Contact, livestock::model::Livestock, shared::embed};

/// The sale of one animal.
///
/// Reads fill in the related rows. A sale nested under a contact leaves
/// them out.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Sell {
    pub id: Uuid,
    pub price: f64,
    pub payment_method: String,
    pub date_of_sale: NaiveDate,
    pub deposit_amount: f64,
    pub balance_due: f64,
    pub zip_code: String,
    pub terms_and_conditions: String,
    pub livestock_id: Uuid,
    pub buyer_contact_id: Uuid,
    pub point_of_contact_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buyer_info: Option<Json<Contact>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub point_of_contact_info: Option<Json<Contact>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub livestock: Option<Json<Livestock>>,
}

pub const SELL_COLUMNS: &str = "id, price::FLOAT8 AS price, payment_method, date_of_sale, \
     deposit_amount::FLOAT8 AS deposit_amount, balance_due::FLOAT8 AS balance_due, zip_code, \
     terms_and_conditions, livestock_id, buyer_contact_id, point_of_contact_id, \
     created_at, updated_at";

const SELL_FIELDS: &[ColumnSpec] = &[
    ColumnSpec::new("id", ColumnKind::Uuid),
    ColumnSpec::new("price", ColumnKind::Decimal),
    ColumnSpec::new("payment_method", ColumnKind::Text),
    ColumnSpec::new("date_of_sale", ColumnKind::Date),
    ColumnSpec::new("deposit_amount", ColumnKind::Decimal),
    ColumnSpec::new("balance_due", ColumnKind::Decimal),
    ColumnSpec::new("zip_code", ColumnKind::Text),
    ColumnSpec::new("terms_and_conditions", ColumnKind::Text),
    ColumnSpec::new("livestock_id", ColumnKind::Uuid),
    ColumnSpec::new("buyer_contact_id", ColumnKind::Uuid),
    ColumnSpec::new("point_of_contact_id", ColumnKind::Uuid),
    ColumnSpec::new("created_at", ColumnKind::Timestamp),
    ColumnSpec::new("updated_at", ColumnKind::Timestamp),
];

pub const SELL_SCHEMA: EntitySchema =
    EntitySchema::new("sells", "sells", ColumnSet::new(SELL_FIELDS));

/// [`SELL_COLUMNS`] plus buyer, point of contact and animal
pub fn sell_columns() -> String {
    format!(
        "{}, {} AS buyer_info, {} AS point_of_contact_info, {} AS livestock",
        SELL_COLUMNS,
        embed::contact("sells.buyer_contact_id"),
        embed::contact("sells.point_of_contact_id"),
        embed::livestock("sells.livestock_id")
    )
}

pub fn select_sells() -> String {
    format!("SELECT {} FROM sells", sell_columns())
}
