//! Update contact command

use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    features::{
        contacts::model::{contact_columns, Contact},
        shared::{
            error_helpers::map_unique_violation,
            patch::{self, Nullable},
            validation::{validate_digits, validate_email, validate_optional_text, ValidationError},
        },
    },
};

/// Partial update. Optional details are cleared by sending `null`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateContactCommand {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub alternative_number: Nullable<String>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub designation: Nullable<String>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub role: Nullable<String>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub organization_company: Nullable<String>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub province: Nullable<String>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub division: Nullable<String>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub district: Nullable<String>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub tehsil: Nullable<String>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub address: Nullable<String>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub postal_code: Nullable<String>,
}

impl UpdateContactCommand {
    pub fn has_changes(&self) -> bool {
        self.full_name.is_some()
            || self.email.is_some()
            || self.phone_number.is_some()
            || [
                &self.alternative_number,
                &self.designation,
                &self.role,
                &self.organization_company,
                &self.province,
                &self.division,
                &self.district,
                &self.tehsil,
                &self.address,
                &self.postal_code,
            ]
            .iter()
            .any(|field| field.is_some())
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.has_changes() {
            return Err(ValidationError::NoFieldsToUpdate);
        }
        validate_optional_text("full_name", self.full_name.as_deref(), 1, 100)?;
        if let Some(ref email) = self.email {
            validate_email("email", email)?;
        }
        if let Some(ref number) = self.phone_number {
            validate_digits("phone_number", number, 7, 20)?;
        }
        if let Some(number) = patch::text(&self.alternative_number) {
            validate_digits("alternative_number", number, 7, 20)?;
        }
        validate_optional_text("designation", patch::text(&self.designation), 1, 100)?;
        validate_optional_text("role", patch::text(&self.role), 1, 100)?;
        validate_optional_text(
            "organization_company",
            patch::text(&self.organization_company),
            1,
            150,
        )?;
        validate_optional_text("province", patch::text(&self.province), 1, 100)?;
        validate_optional_text("division", patch::text(&self.division), 1, 100)?;
        validate_optional_text("district", patch::text(&self.district), 1, 100)?;
        validate_optional_text("tehsil", patch::text(&self.tehsil), 1, 100)?;
        validate_optional_text("address", patch::text(&self.address), 1, 255)?;
        validate_optional_text("postal_code", patch::text(&self.postal_code), 3, 20)?;
        Ok(())
    }
}

#[tracing::instrument(skip(pool, command), fields(contact_id = %id))]
pub async fn handle(pool: PgPool, id: Uuid, command: UpdateContactCommand) -> AppResult<Contact> {
    command.validate()?;

    let sql = format!(
        "UPDATE contacts SET \
           full_name = COALESCE($2, full_name), \
           email = COALESCE($3, email), \
           phone_number = COALESCE($4, phone_number), \
           alternative_number = CASE WHEN $5 THEN $6 ELSE alternative_number END, \
           designation = CASE WHEN $7 THEN $8 ELSE designation END, \
           role = CASE WHEN $9 THEN $10 ELSE role END, \
           organization_company = CASE WHEN $11 THEN $12 ELSE organization_company END, \
           province = CASE WHEN $13 THEN $14 ELSE province END, \
           division = CASE WHEN $15 THEN $16 ELSE division END, \
           district = CASE WHEN $17 THEN $18 ELSE district END, \
           tehsil = CASE WHEN $19 THEN $20 ELSE tehsil END, \
           address = CASE WHEN $21 THEN $22 ELSE address END, \
           postal_code = CASE WHEN $23 THEN $24 ELSE postal_code END, \
           updated_at = NOW() \
         WHERE id = $1 \
         RETURNING {}",
        contact_columns()
    );

    let contact = sqlx::query_as::<_, Contact>(&sql)
        .bind(id)
        .bind(&command.full_name)
        .bind(&command.email)
        .bind(&command.phone_number)
        .bind(patch::is_present(&command.alternative_number))
        .bind(patch::value(&command.alternative_number))
        .bind(patch::is_present(&command.designation))
        .bind(patch::value(&command.designation))
        .bind(patch::is_present(&command.role))
        .bind(patch::value(&command.role))
        .bind(patch::is_present(&command.organization_company))
        .bind(patch::value(&command.organization_company))
        .bind(patch::is_present(&command.province))
        .bind(patch::value(&command.province))
        .bind(patch::is_present(&command.division))
        .bind(patch::value(&command.division))
        .bind(patch::is_present(&command.district))
        .bind(patch::value(&command.district))
        .bind(patch::is_present(&command.tehsil))
        .bind(patch::value(&command.tehsil))
        .bind(patch::is_present(&command.address))
        .bind(patch::value(&command.address))
        .bind(patch::is_present(&command.postal_code))
        .bind(patch::value(&command.postal_code))
        .fetch_optional(&pool)
        .await
        .map_err(|e| map_unique_violation(e, "Contact with this email already exists"))?
        .ok_or_else(|| AppError::not_found("Contact", id))?;

    tracing::info!("Contact updated successfully");

    Ok(contact)
}
