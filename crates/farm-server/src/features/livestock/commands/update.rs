//! Update livestock command

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    features::{
        livestock::model::{livestock_columns, Livestock},
        shared::{
            error_helpers::map_unique_violation,
            patch::{self, Nullable},
            validation::{validate_non_negative, validate_optional_text, ValidationError},
        },
    },
};

/// Partial update. `feed_id` is managed through feeds and cannot be set here.
/// `date_weaned`, `sire` and `dam` are cleared by sending `null`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateLivestockCommand {
    pub name: Option<String>,
    pub breed: Option<String>,
    pub sex: Option<String>,
    pub internal_id: Option<Uuid>,
    pub status: Option<String>,
    pub skin_color: Option<String>,
    pub neutered: Option<String>,
    pub is_breeding_stock: Option<bool>,
    pub weight: Option<f64>,
    pub description: Option<String>,
    pub tag_number: Option<Uuid>,
    pub tag_color: Option<String>,
    pub tag_location: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub birth_weight: Option<f64>,
    pub age_to_wean: Option<i32>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub date_weaned: Nullable<NaiveDate>,
    pub origin: Option<String>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub sire: Nullable<Uuid>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub dam: Nullable<Uuid>,
}

impl UpdateLivestockCommand {
    pub fn has_changes(&self) -> bool {
        self.name.is_some()
            || self.breed.is_some()
            || self.sex.is_some()
            || self.internal_id.is_some()
            || self.status.is_some()
            || self.skin_color.is_some()
            || self.neutered.is_some()
            || self.is_breeding_stock.is_some()
            || self.weight.is_some()
            || self.description.is_some()
            || self.tag_number.is_some()
            || self.tag_color.is_some()
            || self.tag_location.is_some()
            || self.birth_date.is_some()
            || self.birth_weight.is_some()
            || self.age_to_wean.is_some()
            || self.date_weaned.is_some()
            || self.origin.is_some()
            || self.sire.is_some()
            || self.dam.is_some()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.has_changes() {
            return Err(ValidationError::NoFieldsToUpdate);
        }
        validate_optional_text("name", self.name.as_deref(), 1, 100)?;
        validate_optional_text("breed", self.breed.as_deref(), 1, 100)?;
        validate_optional_text("sex", self.sex.as_deref(), 1, 20)?;
        validate_optional_text("status", self.status.as_deref(), 1, 50)?;
        validate_optional_text("skin_color", self.skin_color.as_deref(), 1, 100)?;
        validate_optional_text("neutered", self.neutered.as_deref(), 1, 50)?;
        validate_optional_text("description", self.description.as_deref(), 1, 1000)?;
        validate_optional_text("tag_color", self.tag_color.as_deref(), 1, 50)?;
        validate_optional_text("tag_location", self.tag_location.as_deref(), 1, 50)?;
        validate_optional_text("origin", self.origin.as_deref(), 1, 100)?;
        if let Some(weight) = self.weight {
            validate_non_negative("weight", weight)?;
        }
        if let Some(weight) = self.birth_weight {
            validate_non_negative("birth_weight", weight)?;
        }
        if let Some(days) = self.age_to_wean {
            validate_non_negative("age_to_wean", f64::from(days))?;
        }
        Ok(())
    }
}

#[tracing::instrument(skip(pool, command), fields(livestock_id = %id))]
pub async fn handle(
    pool: PgPool,
    id: Uuid,
    command: UpdateLivestockCommand,
) -> AppResult<Livestock> {
    command.validate()?;

    let sql = format!(
        "UPDATE livestock SET \
           name = COALESCE($2, name), \
           breed = COALESCE($3, breed), \
           sex = COALESCE($4, sex), \
           internal_id = COALESCE($5, internal_id), \
           status = COALESCE($6, status), \
           skin_color = COALESCE($7, skin_color), \
           neutered = COALESCE($8, neutered), \
           is_breeding_stock = COALESCE($9, is_breeding_stock), \
           weight = COALESCE($10::NUMERIC, weight), \
           description = COALESCE($11, description), \
           tag_number = COALESCE($12, tag_number), \
           tag_color = COALESCE($13, tag_color), \
           tag_location = COALESCE($14, tag_location), \
           birth_date = COALESCE($15, birth_date), \
           birth_weight = COALESCE($16::NUMERIC, birth_weight), \
           age_to_wean = COALESCE($17, age_to_wean), \
           date_weaned = CASE WHEN $18 THEN $19 ELSE date_weaned END, \
           origin = COALESCE($20, origin), \
           sire = CASE WHEN $21 THEN $22 ELSE sire END, \
           dam = CASE WHEN $23 THEN $24 ELSE dam END, \
           updated_at = NOW() \
         WHERE id = $1 \
         RETURNING {}",
        livestock_columns()
    );

    let livestock = sqlx::query_as::<_, Livestock>(&sql)
        .bind(id)
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
        .bind(patch::is_present(&command.date_weaned))
        .bind(patch::value(&command.date_weaned))
        .bind(&command.origin)
        .bind(patch::is_present(&command.sire))
        .bind(patch::value(&command.sire))
        .bind(patch::is_present(&command.dam))
        .bind(patch::value(&command.dam))
        .fetch_optional(&pool)
        .await
        .map_err(|e| {
            map_unique_violation(
                e,
                "Livestock with this internal ID or tag number already exists",
            )
        })?
        .ok_or_else(|| AppError::not_found("Livestock", id))?;

    tracing::info!("Livestock updated successfully");

    Ok(livestock)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_patch_is_rejected() {
        assert_eq!(
            UpdateLivestockCommand::default().validate(),
            Err(ValidationError::NoFieldsToUpdate)
        );
    }

    #[test]
    fn test_single_field_patch() {
        let cmd = UpdateLivestockCommand {
            is_breeding_stock: Some(false),
            ..Default::default()
        };
        assert!(cmd.has_changes());
        assert!(cmd.validate().is_ok());
    }

    #[test]
    fn test_blank_text_is_rejected() {
        let cmd = UpdateLivestockCommand {
            status: Some(String::new()),
            ..Default::default()
        };
        assert!(matches!(
            cmd.validate(),
            Err(ValidationError::Length { field: "status", .. })
        ));
    }

    #[test]
    fn test_null_clears_nullable_columns() {
        let cmd: UpdateLivestockCommand =
            serde_json::from_value(serde_json::json!({ "sire": null })).unwrap();
        assert_eq!(cmd.sire, Some(None));
        assert_eq!(cmd.dam, None);
        assert!(cmd.has_changes());
        assert!(cmd.validate().is_ok());
    }

    #[test]
    fn test_feed_id_is_not_accepted() {
        let cmd: UpdateLivestockCommand =
            serde_json::from_value(serde_json::json!({ "feed_id": uuid::Uuid::nil() })).unwrap();
        assert!(!cmd.has_changes());
    }
}
