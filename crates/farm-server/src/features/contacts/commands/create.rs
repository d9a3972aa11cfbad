//! Create contact command
//!
//! [`insert`] is also used by sales, which create buyer and point-of-contact
//! rows inside their own transaction.

use serde::{Deserialize, Serialize};
use sqlx::{PgExecutor, PgPool};

use crate::{
    error::AppResult,
    features::{
        contacts::model::{contact_columns, Contact},
        shared::{
            error_helpers::map_unique_violation,
            validation::{
                validate_digits, validate_email, validate_optional_text, validate_text,
                ValidationError,
            },
        },
    },
};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateContactCommand {
    pub full_name: String,
    /// Unique across all contacts
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
}

impl CreateContactCommand {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_text("full_name", &self.full_name, 1, 100)?;
        validate_email("email", &self.email)?;
        validate_digits("phone_number", &self.phone_number, 7, 20)?;
        if let Some(ref number) = self.alternative_number {
            validate_digits("alternative_number", number, 7, 20)?;
        }
        validate_optional_text("designation", self.designation.as_deref(), 1, 100)?;
        validate_optional_text("role", self.role.as_deref(), 1, 100)?;
        validate_optional_text(
            "organization_company",
            self.organization_company.as_deref(),
            1,
            150,
        )?;
        validate_optional_text("province", self.province.as_deref(), 1, 100)?;
        validate_optional_text("division", self.division.as_deref(), 1, 100)?;
        validate_optional_text("district", self.district.as_deref(), 1, 100)?;
        validate_optional_text("tehsil", self.tehsil.as_deref(), 1, 100)?;
        validate_optional_text("address", self.address.as_deref(), 1, 255)?;
        validate_optional_text("postal_code", self.postal_code.as_deref(), 3, 20)?;
        Ok(())
    }
}

/// Insert a validated contact. A duplicate email is a conflict.
pub async fn insert<'e, E>(executor: E, command: &CreateContactCommand) -> AppResult<Contact>
where
    E: PgExecutor<'e>,
{
    let sql = format!(
        "INSERT INTO contacts (full_name, email, phone_number, alternative_number, designation, \
           role, organization_company, province, division, district, tehsil, address, postal_code) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13) \
         RETURNING {}",
        contact_columns()
    );

    sqlx::query_as::<_, Contact>(&sql)
        .bind(&command.full_name)
        .bind(&command.email)
        .bind(&command.phone_number)
        .bind(&command.alternative_number)
        .bind(&command.designation)
        .bind(&command.role)
        .bind(&command.organization_company)
        .bind(&command.province)
        .bind(&command.division)
        .bind(&command.district)
        .bind(&command.tehsil)
        .bind(&command.address)
        .bind(&command.postal_code)
        .fetch_one(executor)
        .await
        .map_err(|e| {
            map_unique_violation(
                e,
                &format!("Contact with email {} already exists", command.email),
            )
        })
}

#[tracing::instrument(skip(pool, command), fields(email = %command.email))]
pub async fn handle(pool: PgPool, command: CreateContactCommand) -> AppResult<Contact> {
    command.validate()?;

    let contact = insert(&pool, &command).await?;

    tracing::info!(contact_id = %contact.id, "Contact created successfully");

    Ok(contact)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command() -> CreateContactCommand {
        CreateContactCommand {
            full_name: "Amina Khan".to_string(),
            email: "amina@example.com".to_string(),
            phone_number: "03001234567".to_string(),
            postal_code: Some("54000".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_validation_success() {
        assert!(command().validate().is_ok());
    }

    #[test]
    fn test_validation_invalid_email() {
        let cmd = CreateContactCommand {
            email: "amina.example.com".to_string(),
            ..command()
        };
        assert_eq!(
            cmd.validate(),
            Err(ValidationError::InvalidEmail { field: "email" })
        );
    }

    #[test]
    fn test_validation_phone_must_be_digits() {
        let cmd = CreateContactCommand {
            phone_number: "0300-123-4567".to_string(),
            ..command()
        };
        assert!(matches!(cmd.validate(), Err(ValidationError::Digits { .. })));

        let cmd = CreateContactCommand {
            alternative_number: Some("123".to_string()),
            ..command()
        };
        assert!(matches!(
            cmd.validate(),
            Err(ValidationError::Digits {
                field: "alternative_number",
                ..
            })
        ));
    }

    #[test]
    fn test_validation_optional_lengths() {
        let cmd = CreateContactCommand {
            postal_code: Some("12".to_string()),
            ..command()
        };
        assert!(matches!(
            cmd.validate(),
            Err(ValidationError::Length {
                field: "postal_code",
                ..
            })
        ));

        let cmd = CreateContactCommand {
            organization_company: Some("x".repeat(151)),
            ..command()
        };
        assert!(cmd.validate().is_err());
    }
}
