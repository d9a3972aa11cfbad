//! Contact row and its filterable columns

use chrono::{DateTime, Utc};
use farm_common::filter::{ColumnKind, ColumnSet, ColumnSpec, EntitySchema};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use uuid::Uuid;

use crate::features::{sells::model::Sell, shared::embed};

/// A buyer, supplier, vet or any other person the farm deals with
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Contact {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub alternative_number: Option<String>,
    pub designation: Option<String>,
    pub role: Option<String>,
    pub organization_company: Option<String>,
    pub province: Option<String>,
    pub division: Option<String>,
    pub district: Option<String>,
    pub tehsil: Option<String>,
    pub address: Option<String>,
    pub postal_code: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Sales where this contact is the buyer, newest first
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buyer_sells: Option<Json<Vec<Sell>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub point_of_contact_sells: Option<Json<Vec<Sell>>>,
}

pub const CONTACT_COLUMNS: &str = "id, full_name, email, phone_number, alternative_number, \
     designation, role, organization_company, province, division, district, tehsil, \
     address, postal_code, created_at, updated_at";

const CONTACT_FIELDS: &[ColumnSpec] = &[
    ColumnSpec::new("id", ColumnKind::Uuid),
    ColumnSpec::new("full_name", ColumnKind::Text),
    ColumnSpec::new("email", ColumnKind::Text),
    ColumnSpec::new("phone_number", ColumnKind::Text),
    ColumnSpec::new("alternative_number", ColumnKind::Text),
    ColumnSpec::new("designation", ColumnKind::Text),
    ColumnSpec::new("role", ColumnKind::Text),
    ColumnSpec::new("organization_company", ColumnKind::Text),
    ColumnSpec::new("province", ColumnKind::Text),
    ColumnSpec::new("division", ColumnKind::Text),
    ColumnSpec::new("district", ColumnKind::Text),
    ColumnSpec::new("tehsil", ColumnKind::Text),
    ColumnSpec::new("address", ColumnKind::Text),
    ColumnSpec::new("postal_code", ColumnKind::Text),
    ColumnSpec::new("created_at", ColumnKind::Timestamp),
    ColumnSpec::new("updated_at", ColumnKind::Timestamp),
];

pub const CONTACT_SCHEMA: EntitySchema =
    EntitySchema::new("contacts", "contacts", ColumnSet::new(CONTACT_FIELDS));

/// [`CONTACT_COLUMNS`] plus the sales the contact took part in
pub fn contact_columns() -> String {
    format!(
        "{}, {} AS buyer_sells, {} AS point_of_contact_sells",
        CONTACT_COLUMNS,
        embed::sells("buyer_contact_id", "contacts.id"),
        embed::sells("point_of_contact_id", "contacts.id")
    )
}

pub fn select_contacts() -> String {
    format!("SELECT {} FROM contacts", contact_columns())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::shared::test_helpers::assert_columns_selected;

    #[test]
    fn test_filterable_columns_are_selected() {
        assert_columns_selected(&CONTACT_SCHEMA, CONTACT_COLUMNS);
    }
}
