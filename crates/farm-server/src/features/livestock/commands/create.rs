//! Create livestock command

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    error::AppResult,
    features::{
        livestock::model::{livestock_columns, Livestock},
        shared::{
            error_helpers::map_unique_violation,
            validation::{validate_non_negative, validate_text, ValidationError},
        },
    },
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateLivestockCommand {
    pub name: String,
    pub breed: String,
    pub sex: String,
    /// Farm-assigned identifier (must be unique)
    pub internal_id: Uuid,
    pub status: String,
    pub skin_color: String,
    pub neutered: String,
    pub is_breeding_stock: bool,
    pub weight: f64,
    pub description: String,
    /// Ear tag identifier (must be unique)
    pub tag_number: Uuid,
    pub tag_color: String,
    pub tag_location: String,
    pub birth_date: NaiveDate,
    pub birth_weight: f64,
    pub age_to_wean: i32,
    pub date_weaned: Option<NaiveDate>,
    pub origin: String,
    pub sire: Option<Uuid>,
    pub dam: Option<Uuid>,
}

impl CreateLivestockCommand {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_text("name", &self.name, 1, 100)?;
        validate_text("breed", &self.breed, 1, 100)?;
        validate_text("sex", &self.sex, 1, 20)?;
        validate_text("status", &self.status, 1, 50)?;
        validate_text("skin_color", &self.skin_color, 1, 100)?;
        validate_text("neutered", &self.neutered, 1, 50)?;
        validate_non_negative("weight", self.weight)?;
        validate_text("description", &self.description, 1, 1000)?;
        validate_text("tag_color", &self.tag_color, 1, 50)?;
        validate_text("tag_location", &self.tag_location, 1, 50)?;
        validate_non_negative("birth_weight", self.birth_weight)?;
        validate_non_negative("age_to_wean", f64::from(self.age_to_wean))?;
        validate_text("origin", &self.origin, 1, 100)?;
        Ok(())
    }
}

#[tracing::instrument(skip(pool, command), fields(internal_id = %command.internal_id))]
pub async fn handle(pool: PgPool, command: CreateLivestockCommand) -> AppResult<Livestock> {
    command.validate()?;

    let sql = format!(
        "INSERT INTO livestock (name, breed, sex, internal_id, status, skin_color, neutered, \
           is_breeding_stock, weight, description, tag_number, tag_color, tag_location, \
           birth_date, birth_weight, age_to_wean, date_weaned, origin, sire, dam) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9::NUMERIC, $10, $11, $12, $13, $14, \
           $15::NUMERIC, $16, $17, $18, $19, $20) \
         RETURNING {}",
        livestock_columns()
    );

    let livestock = sqlx::query_as::<_, Livestock>(&sql)
        .bind(&command.name)
        .bind(&command.breed)
        .bind(&command.sex)
        .bind(command.internal_id)
        .bind(&command.status)
        .bind(&command.skin_color)
        .bind(&command.neutered)
        .bind(command.is_breeding_stock)
        .bind(command.weight)
        .bind(&command.description)
        .bind(command.tag_number)
        .bind(&command.tag_color)
        .bind(&command.tag_location)
        .bind(command.birth_date)
        .bind(command.birth_weight)
        .bind(command.age_to_wean)
        .bind(command.date_weaned)
        .bind(&command.origin)
        .bind(command.sire)
        .bind(command.dam)
        .fetch_one(&pool)
        .await
        .map_err(|e| {
            map_unique_violation(
                e,
                "Livestock with this internal ID or tag number already exists",
            )
        })?;

    tracing::info!(livestock_id = %livestock.id, "Livestock created successfully");

    Ok(livestock)
}
