//! Update group command

use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    features::{
        groups::model::{Group, GROUP_COLUMNS},
        shared::{
            error_helpers::map_unique_violation,
            patch::{self, Nullable},
            validation::{validate_non_negative, validate_optional_text, ValidationError},
        },
    },
};

/// Partial update; absent fields keep their current value and
/// `remarks: null` clears the remarks
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateGroupCommand {
    pub group_name: Option<String>,
    pub group_id_number: Option<String>,
    pub number_of_livestock: Option<i32>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub remarks: Nullable<String>,
}

impl UpdateGroupCommand {
    pub fn has_changes(&self) -> bool {
        self.group_name.is_some()
            || self.group_id_number.is_some()
            || self.number_of_livestock.is_some()
            || self.remarks.is_some()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.has_changes() {
            return Err(ValidationError::NoFieldsToUpdate);
        }
        validate_optional_text("group_name", self.group_name.as_deref(), 1, 100)?;
        validate_optional_text("group_id_number", self.group_id_number.as_deref(), 1, 50)?;
        if let Some(count) = self.number_of_livestock {
            validate_non_negative("number_of_livestock", f64::from(count))?;
        }
        Ok(())
    }
}

#[tracing::instrument(skip(pool, command), fields(group_id = %id))]
pub async fn handle(pool: PgPool, id: Uuid, command: UpdateGroupCommand) -> AppResult<Group> {
    command.validate()?;

    let sql = format!(
        "UPDATE groups SET \
           group_name = COALESCE($2, group_name), \
           group_id_number = COALESCE($3, group_id_number), \
           number_of_livestock = COALESCE($4, number_of_livestock), \
           remarks = CASE WHEN $5 THEN $6 ELSE remarks END, \
           updated_at = NOW() \
         WHERE id = $1 \
         RETURNING {}",
        GROUP_COLUMNS
    );

    let group = sqlx::query_as::<_, Group>(&sql)
        .bind(id)
        .bind(&command.group_name)
        .bind(&command.group_id_number)
        .bind(command.number_of_livestock)
        .bind(patch::is_present(&command.remarks))
        .bind(patch::value(&command.remarks))
        .fetch_optional(&pool)
        .await
        .map_err(|e| map_unique_violation(e, "Group with this ID number already exists"))?
        .ok_or_else(|| AppError::not_found("Group", id))?;

    tracing::info!("Group updated successfully");

    Ok(group)
}
