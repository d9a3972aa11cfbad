//! Create breeding record command

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::{
    error::AppResult,
    features::{
        breeds::model::{Breed, BREED_COLUMNS},
        shared::validation::{validate_positive, validate_text, ValidationError},
    },
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBreedCommand {
    pub breeding_date: NaiveDate,
    pub breeding_method: String,
    pub breeding_cost: f64,
    pub pre_breeding_health: String,
    pub treatment: String,
    pub estrus_detection_date: NaiveDate,
    pub estrus_cycle_length: String,
    pub check_date: NaiveDate,
    pub status: String,
    pub estimated_due_date: NaiveDate,
    pub result_of_breeding: String,
    pub number_of_offspring: i32,
}

impl CreateBreedCommand {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_text("breeding_method", &self.breeding_method, 1, 100)?;
        validate_positive("breeding_cost", self.breeding_cost)?;
        validate_text("pre_breeding_health", &self.pre_breeding_health, 1, 255)?;
        validate_text("treatment", &self.treatment, 1, 100)?;
        validate_text("estrus_cycle_length", &self.estrus_cycle_length, 1, 50)?;
        validate_text("status", &self.status, 1, 50)?;
        validate_text("result_of_breeding", &self.result_of_breeding, 1, 100)?;
        validate_positive("number_of_offspring", f64::from(self.number_of_offspring))?;
        Ok(())
    }
}

#[tracing::instrument(skip(pool, command), fields(breeding_date = %command.breeding_date))]
pub async fn handle(pool: PgPool, command: CreateBreedCommand) -> AppResult<Breed> {
    command.validate()?;

    let sql = format!(
        "INSERT INTO breeds (breeding_date, breeding_method, breeding_cost, pre_breeding_health, \
           treatment, estrus_detection_date, estrus_cycle_length, check_date, status, \
           estimated_due_date, result_of_breeding, number_of_offspring) \
         VALUES ($1, $2, $3::NUMERIC, $4, $5, $6, $7, $8, $9, $10, $11, $12) \
         RETURNING {}",
        BREED_COLUMNS
    );

    let breed = sqlx::query_as::<_, Breed>(&sql)
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
        .fetch_one(&pool)
        .await?;

    tracing::info!(breed_id = %breed.id, "Breed record created successfully");

    Ok(breed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, month, day).unwrap()
    }

    fn command() -> CreateBreedCommand {
        CreateBreedCommand {
            breeding_date: date(2, 1),
            breeding_method: "ARTIFICIAL_INSEMINATION".to_string(),
            breeding_cost: 150.0,
            pre_breeding_health: "Good body condition".to_string(),
            treatment: "NONE".to_string(),
            estrus_detection_date: date(1, 28),
            estrus_cycle_length: "21 days".to_string(),
            check_date: date(3, 15),
            status: "PREGNANT".to_string(),
            estimated_due_date: date(11, 10),
            result_of_breeding: "SUCCESS".to_string(),
            number_of_offspring: 1,
        }
    }

    #[test]
    fn test_validation_success() {
        assert!(command().validate().is_ok());
    }

    #[test]
    fn test_cost_must_be_positive() {
        let cmd = CreateBreedCommand {
            breeding_cost: 0.0,
            ..command()
        };
        assert_eq!(
            cmd.validate(),
            Err(ValidationError::NotPositive {
                field: "breeding_cost"
            })
        );
    }

    #[test]
    fn test_offspring_must_be_positive() {
        let cmd = CreateBreedCommand {
            number_of_offspring: 0,
            ..command()
        };
        assert_eq!(
            cmd.validate(),
            Err(ValidationError::NotPositive {
                field: "number_of_offspring"
            })
        );
    }
}
