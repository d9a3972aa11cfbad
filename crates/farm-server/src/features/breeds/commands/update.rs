//! Update breeding record command

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    features::{
        breeds::model::{Breed, BREED_COLUMNS},
        shared::validation::{validate_optional_text, validate_positive, ValidationError},
    },
};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateBreedCommand {
    pub breeding_date: Option<NaiveDate>,
    pub breeding_method: Option<String>,
    pub breeding_cost: Option<f64>,
    pub pre_breeding_health: Option<String>,
    pub treatment: Option<String>,
    pub estrus_detection_date: Option<NaiveDate>,
    pub estrus_cycle_length: Option<String>,
    pub check_date: Option<NaiveDate>,
    pub status: Option<String>,
    pub estimated_due_date: Option<NaiveDate>,
    pub result_of_breeding: Option<String>,
    pub number_of_offspring: Option<i32>,
}

impl UpdateBreedCommand {
    pub fn has_changes(&self) -> bool {
        self.breeding_date.is_some()
            || self.breeding_method.is_some()
            || self.breeding_cost.is_some()
            || self.pre_breeding_health.is_some()
            || self.treatment.is_some()
            || self.estrus_detection_date.is_some()
            || self.estrus_cycle_length.is_some()
            || self.check_date.is_some()
            || self.status.is_some()
            || self.estimated_due_date.is_some()
            || self.result_of_breeding.is_some()
            || self.number_of_offspring.is_some()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.has_changes() {
            return Err(ValidationError::NoFieldsToUpdate);
        }
        validate_optional_text("breeding_method", self.breeding_method.as_deref(), 1, 100)?;
        validate_optional_text(
            "pre_breeding_health",
            self.pre_breeding_health.as_deref(),
            1,
            255,
        )?;
        validate_optional_text("treatment", self.treatment.as_deref(), 1, 100)?;
        validate_optional_text(
            "estrus_cycle_length",
            self.estrus_cycle_length.as_deref(),
            1,
            50,
        )?;
        validate_optional_text("status", self.status.as_deref(), 1, 50)?;
        validate_optional_text(
            "result_of_breeding",
            self.result_of_breeding.as_deref(),
            1,
            100,
        )?;
        if let Some(cost) = self.breeding_cost {
            validate_positive("breeding_cost", cost)?;
        }
        if let Some(count) = self.number_of_offspring {
            validate_positive("number_of_offspring", f64::from(count))?;
        }
        Ok(())
    }
}

#[tracing::instrument(skip(pool, command), fields(breed_id = %id))]
pub async fn handle(pool: PgPool, id: Uuid, command: UpdateBreedCommand) -> AppResult<Breed> {
    command.validate()?;

    let sql = format!(
        "UPDATE breeds SET \
           breeding_date = COALESCE($2, breeding_date), \
           breeding_method = COALESCE($3, breeding_method), \
           breeding_cost = COALESCE($4::NUMERIC, breeding_cost), \
           pre_breeding_health = COALESCE($5, pre_breeding_health), \
           treatment = COALESCE($6, treatment), \
           estrus_detection_date = COALESCE($7, estrus_detection_date), \
           estrus_cycle_length = COALESCE($8, estrus_cycle_length), \
           check_date = COALESCE($9, check_date), \
           status = COALESCE($10, status), \
           estimated_due_date = COALESCE($11, estimated_due_date), \
           result_of_breeding = COALESCE($12, result_of_breeding), \
           number_of_offspring = COALESCE($13, number_of_offspring), \
           updated_at = NOW() \
         WHERE id = $1 \
         RETURNING {}",
        BREED_COLUMNS
    );

    let breed = sqlx::query_as::<_, Breed>(&sql)
        .bind(id)
        .bind(command.breeding_date)
        .bind(&command.breeding_method)
        .bind(command.breeding_cost)
        .bind(&command.pre_breeding_health)
        .bind(&command.treatment)
        .bind(command.estrus_detection_date)
        .bind(&command.estrus_cycle_length)
        .bind(command.check_date)
        .bind(&command.status)
        .bind(command.estimated_due_date)
        .bind(&command.result_of_breeding)
        .bind(command.number_of_offspring)
        .fetch_optional(&pool)
        .await?
        .ok_or_else(|| AppError::not_found("Breed record", id))?;

    tracing::info!("Breed record updated successfully");

    Ok(breed)
}
