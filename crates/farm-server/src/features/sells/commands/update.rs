//! Update sale record command
//!
//! Only the sale terms can change. The animal and the contacts stay as
//! recorded; contacts are edited through their own resource.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    features::{
        sells::model::{sell_columns, Sell},
        shared::validation::{validate_non_negative, validate_optional_text, ValidationError},
    },
};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateSellCommand {
    pub price: Option<f64>,
    pub payment_method: Option<String>,
    pub date_of_sale: Option<NaiveDate>,
    pub deposit_amount: Option<f64>,
    pub balance_due: Option<f64>,
    pub zip_code: Option<String>,
    pub terms_and_conditions: Option<String>,
}

impl UpdateSellCommand {
    pub fn has_changes(&self) -> bool {
        self.price.is_some()
            || self.payment_method.is_some()
            || self.date_of_sale.is_some()
            || self.deposit_amount.is_some()
            || self.balance_due.is_some()
            || self.zip_code.is_some()
            || self.terms_and_conditions.is_some()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.has_changes() {
            return Err(ValidationError::NoFieldsToUpdate);
        }
        for (field, amount) in [
            ("price", self.price),
            ("deposit_amount", self.deposit_amount),
            ("balance_due", self.balance_due),
        ] {
            if let Some(amount) = amount {
                validate_non_negative(field, amount)?;
            }
        }
        validate_optional_text("payment_method", self.payment_method.as_deref(), 1, 50)?;
        validate_optional_text("zip_code", self.zip_code.as_deref(), 3, 20)?;
        validate_optional_text(
            "terms_and_conditions",
            self.terms_and_conditions.as_deref(),
            1,
            2000,
        )?;
        Ok(())
    }
}

#[tracing::instrument(skip(pool, command), fields(sell_id = %id))]
pub async fn handle(pool: PgPool, id: Uuid, command: UpdateSellCommand) -> AppResult<Sell> {
    command.validate()?;

    let sql = format!(
        "UPDATE sells SET \
           price = COALESCE($2::NUMERIC, price), \
           payment_method = COALESCE($3, payment_method), \
           date_of_sale = COALESCE($4, date_of_sale), \
           deposit_amount = COALESCE($5::NUMERIC, deposit_amount), \
           balance_due = COALESCE($6::NUMERIC, balance_due), \
           zip_code = COALESCE($7, zip_code), \
           terms_and_conditions = COALESCE($8, terms_and_conditions), \
           updated_at = NOW() \
         WHERE id = $1 \
         RETURNING {}",
        sell_columns()
    );

    let sell = sqlx::query_as::<_, Sell>(&sql)
        .bind(id)
        .bind(command.price)
        .bind(&command.payment_method)
        .bind(command.date_of_sale)
        .bind(command.deposit_amount)
        .bind(command.balance_due)
        .bind(&command.zip_code)
        .bind(&command.terms_and_conditions)
        .fetch_optional(&pool)
        .await?
        .ok_or_else(|| AppError::not_found("Sell record", id))?;

    tracing::info!("Sell record updated successfully");

    Ok(sell)
}
