//! Create medication record command

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use super::links;
use crate::{
    db::ScopedTransaction,
    error::{AppError, AppResult},
    features::{
        medications::{model::Medication, queries::get::find},
        shared::validation::{
            validate_ids, validate_optional_text, validate_positive, validate_text,
            ValidationError,
        },
    },
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMedicationCommand {
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
    /// Treated animals; at least one
    pub livestock_ids: Vec<Uuid>,
}

impl CreateMedicationCommand {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_text("brand", &self.brand, 1, 100)?;
        validate_text("medication_brand", &self.medication_brand, 1, 100)?;
        validate_text("name", &self.name, 1, 100)?;
        validate_optional_text("dosage", self.dosage.as_deref(), 1, 100)?;
        validate_optional_text("method", self.method.as_deref(), 1, 100)?;
        validate_optional_text("administered_by", self.administered_by.as_deref(), 1, 100)?;
        validate_optional_text("notes", self.notes.as_deref(), 0, 1000)?;
        if let Some(cost) = self.cost {
            validate_positive("cost", cost)?;
        }
        if let Some(cost) = self.additional_cost {
            validate_positive("additional_cost", cost)?;
        }
        validate_ids("livestock_ids", &self.livestock_ids)?;
        Ok(())
    }
}

#[tracing::instrument(
    skip(pool, command),
    fields(name = %command.name, livestock = command.livestock_ids.len())
)]
pub async fn handle(pool: PgPool, command: CreateMedicationCommand) -> AppResult<Medication> {
    command.validate()?;

    let mut scope = ScopedTransaction::begin(&pool, "create medication record").await?;
    let outcome = create(scope.conn(), &command).await;
    let medication = scope.finish(outcome).await?;

    tracing::info!(medication_id = %medication.id, "Medication record created successfully");

    Ok(medication)
}

async fn create(
    conn: &mut PgConnection,
    command: &CreateMedicationCommand,
) -> AppResult<Medication> {
    let id: Uuid = sqlx::query_scalar(
        "INSERT INTO medications (date, brand, medication_brand, name, dosage, method, \
           administered_by, cost, additional_cost, next_vaccination_date, notes) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8::NUMERIC, $9::NUMERIC, $10, $11) \
         RETURNING id",
    )
    .bind(command.date)
    .bind(&command.brand)
    .bind(&command.medication_brand)
    .bind(&command.name)
    .bind(&command.dosage)
    .bind(&command.method)
    .bind(&command.administered_by)
    .bind(command.cost)
    .bind(command.additional_cost)
    .bind(command.next_vaccination_date)
    .bind(&command.notes)
    .fetch_one(&mut *conn)
    .await?;

    links::replace(&mut *conn, id, &command.livestock_ids).await?;

    find(&mut *conn, id)
        .await?
        .ok_or_else(|| AppError::Internal(format!("Medication {} vanished after insert", id)))
}
