//! Create sale record command
//!
//! Runs in one transaction:
//!
//! 1. the animal must exist and must not have been sold already
//! 2. the buyer is looked up by `buyer_email`, or created from `buyer_*`
//! 3. the point of contact is looked up by `contact_email`, or created from
//!    `contact_*`
//! 4. the sale row is written

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use crate::{
    db::ScopedTransaction,
    error::{AppError, AppResult},
    features::{
        contacts::{
            commands::{create::insert, CreateContactCommand},
            queries::get::find_by_email,
            Contact,
        },
        sells::model::{sell_columns, Sell},
        shared::{
            error_helpers::map_unique_violation,
            relations::ensure_livestock_exists,
            validation::{
                validate_digits, validate_email, validate_non_negative, validate_text,
                ValidationError,
            },
        },
    },
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSellCommand {
    /// The animal being sold
    pub livestock_id: Uuid,
    pub price: f64,
    pub payment_method: String,
    pub date_of_sale: NaiveDate,
    pub deposit_amount: f64,
    pub balance_due: f64,
    pub zip_code: String,
    pub terms_and_conditions: String,

    pub buyer_name: String,
    pub buyer_email: String,
    pub buyer_phone_number: String,
    pub buyer_city: String,
    pub buyer_state: String,
    pub buyer_zip_code: String,
    pub buyer_designation: String,

    pub contact_name: String,
    pub contact_phone_number: String,
    pub contact_email: String,
    pub contact_address: String,
    pub contact_role: String,
}

impl CreateSellCommand {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_non_negative("price", self.price)?;
        validate_text("payment_method", &self.payment_method, 1, 50)?;
        validate_non_negative("deposit_amount", self.deposit_amount)?;
        validate_non_negative("balance_due", self.balance_due)?;
        validate_text("zip_code", &self.zip_code, 3, 20)?;
        validate_text("terms_and_conditions", &self.terms_and_conditions, 1, 2000)?;

        validate_text("buyer_name", &self.buyer_name, 1, 100)?;
        validate_email("buyer_email", &self.buyer_email)?;
        validate_digits("buyer_phone_number", &self.buyer_phone_number, 7, 20)?;
        validate_text("buyer_city", &self.buyer_city, 1, 100)?;
        validate_text("buyer_state", &self.buyer_state, 1, 100)?;
        validate_text("buyer_zip_code", &self.buyer_zip_code, 3, 20)?;
        validate_text("buyer_designation", &self.buyer_designation, 1, 100)?;

        validate_text("contact_name", &self.contact_name, 1, 100)?;
        validate_digits("contact_phone_number", &self.contact_phone_number, 7, 20)?;
        validate_email("contact_email", &self.contact_email)?;
        validate_text("contact_address", &self.contact_address, 1, 255)?;
        validate_text("contact_role", &self.contact_role, 1, 100)?;
        Ok(())
    }

    /// Buyer contact built from the `buyer_*` fields. City and state are
    /// stored as district and province.
    pub fn buyer(&self) -> CreateContactCommand {
        CreateContactCommand {
            full_name: self.buyer_name.clone(),
            email: self.buyer_email.clone(),
            phone_number: self.buyer_phone_number.clone(),
            designation: Some(self.buyer_designation.clone()),
            district: Some(self.buyer_city.clone()),
            province: Some(self.buyer_state.clone()),
            postal_code: Some(self.buyer_zip_code.clone()),
            ..Default::default()
        }
    }

    /// Point of contact built from the `contact_*` fields
    pub fn point_of_contact(&self) -> CreateContactCommand {
        CreateContactCommand {
            full_name: self.contact_name.clone(),
            email: self.contact_email.clone(),
            phone_number: self.contact_phone_number.clone(),
            address: Some(self.contact_address.clone()),
            role: Some(self.contact_role.clone()),
            ..Default::default()
        }
    }
}

#[tracing::instrument(skip(pool, command), fields(livestock_id = %command.livestock_id))]
pub async fn handle(pool: PgPool, command: CreateSellCommand) -> AppResult<Sell> {
    command.validate()?;

    let mut scope = ScopedTransaction::begin(&pool, "create sell record").await?;
    let outcome = create(scope.conn(), &command).await;
    let sell = scope.finish(outcome).await?;

    tracing::info!(sell_id = %sell.id, "Sell record created successfully");

    Ok(sell)
}

async fn create(conn: &mut PgConnection, command: &CreateSellCommand) -> AppResult<Sell> {
    ensure_livestock_exists(&mut *conn, command.livestock_id).await?;
    ensure_not_sold(&mut *conn, command.livestock_id).await?;

    let buyer = find_or_create_contact(&mut *conn, &command.buyer()).await?;
    let point_of_contact = find_or_create_contact(&mut *conn, &command.point_of_contact()).await?;

    let sql = format!(
        "INSERT INTO sells (price, payment_method, date_of_sale, deposit_amount, balance_due, \
           zip_code, terms_and_conditions, livestock_id, buyer_contact_id, point_of_contact_id) \
         VALUES ($1::NUMERIC, $2, $3, $4::NUMERIC, $5::NUMERIC, $6, $7, $8, $9, $10) \
         RETURNING {}",
        sell_columns()
    );

    sqlx::query_as::<_, Sell>(&sql)
        .bind(command.price)
        .bind(&command.payment_method)
        .bind(command.date_of_sale)
        .bind(command.deposit_amount)
        .bind(command.balance_due)
        .bind(&command.zip_code)
        .bind(&command.terms_and_conditions)
        .bind(command.livestock_id)
        .bind(buyer.id)
        .bind(point_of_contact.id)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| map_unique_violation(e, &already_sold(command.livestock_id)))
}

async fn ensure_not_sold(conn: &mut PgConnection, livestock_id: Uuid) -> AppResult<()> {
    let existing: Option<Uuid> = sqlx::query_scalar("SELECT id FROM sells WHERE livestock_id = $1")
        .bind(livestock_id)
        .fetch_optional(&mut *conn)
        .await?;

    match existing {
        Some(_) => Err(AppError::Conflict(already_sold(livestock_id))),
        None => Ok(()),
    }
}

async fn find_or_create_contact(
    conn: &mut PgConnection,
    contact: &CreateContactCommand,
) -> AppResult<Contact> {
    if let Some(existing) = find_by_email(&mut *conn, &contact.email).await? {
        tracing::debug!(contact_id = %existing.id, "Reusing existing contact");
        return Ok(existing);
    }
    insert(&mut *conn, contact).await
}

fn already_sold(livestock_id: Uuid) -> String {
    format!("Livestock with ID {} is already sold", livestock_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command() -> CreateSellCommand {
        CreateSellCommand {
            livestock_id: Uuid::new_v4(),
            price: 1200.0,
            payment_method: "BANK_TRANSFER".to_string(),
            date_of_sale: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            deposit_amount: 200.0,
            balance_due: 1000.0,
            zip_code: "54000".to_string(),
            terms_and_conditions: "Balance due on collection".to_string(),
            buyer_name: "Bilal Ahmed".to_string(),
            buyer_email: "bilal@example.com".to_string(),
            buyer_phone_number: "03211234567".to_string(),
            buyer_city: "Lahore".to_string(),
            buyer_state: "Punjab".to_string(),
            buyer_zip_code: "54000".to_string(),
            buyer_designation: "Owner".to_string(),
            contact_name: "Sara Malik".to_string(),
            contact_phone_number: "03331234567".to_string(),
            contact_email: "sara@example.com".to_string(),
            contact_address: "12 Mall Road".to_string(),
            contact_role: "Broker".to_string(),
        }
    }

    #[test]
    fn test_validation_success() {
        assert!(command().validate().is_ok());
    }

    #[test]
    fn test_buyer_fields_map_to_contact() {
        let buyer = command().buyer();
        assert_eq!(buyer.full_name, "Bilal Ahmed");
        assert_eq!(buyer.district.as_deref(), Some("Lahore"));
        assert_eq!(buyer.province.as_deref(), Some("Punjab"));
        assert_eq!(buyer.postal_code.as_deref(), Some("54000"));
        assert_eq!(buyer.designation.as_deref(), Some("Owner"));
        assert!(buyer.validate().is_ok());
    }

    #[test]
    fn test_point_of_contact_fields_map_to_contact() {
        let contact = command().point_of_contact();
        assert_eq!(contact.email, "sara@example.com");
        assert_eq!(contact.address.as_deref(), Some("12 Mall Road"));
        assert_eq!(contact.role.as_deref(), Some("Broker"));
        assert!(contact.district.is_none());
        assert!(contact.validate().is_ok());
    }

    #[test]
    fn test_validation_names_the_prefixed_field() {
        let cmd = CreateSellCommand {
            contact_phone_number: "+92 333".to_string(),
            ..command()
        };
        assert!(matches!(
            cmd.validate(),
            Err(ValidationError::Digits {
                field: "contact_phone_number",
                ..
            })
        ));

        let cmd = CreateSellCommand {
            buyer_email: "b@x".to_string(),
            ..command()
        };
        assert!(matches!(
            cmd.validate(),
            Err(ValidationError::Length {
                field: "buyer_email",
                ..
            })
        ));
    }

    #[test]
    fn test_already_sold_message() {
        assert_eq!(
            already_sold(Uuid::nil()),
            "Livestock with ID 00000000-0000-0000-0000-000000000000 is already sold"
        );
    }
}
