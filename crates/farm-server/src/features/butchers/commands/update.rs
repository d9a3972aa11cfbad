//! Update butcher record command

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use super::create::{ensure_internal_id_free, internal_id_taken};
use crate::{
    db::ScopedTransaction,
    error::{AppError, AppResult},
    features::{
        butchers::model::{butcher_columns, Butcher},
        shared::{
            error_helpers::map_unique_violation,
            patch::{self, Nullable},
            validation::{validate_optional_text, ValidationError},
        },
    },
};

/// Partial update. The animal a record belongs to cannot change.
/// `cause: null` clears the cause.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateButcherCommand {
    pub name: Option<String>,
    pub breed: Option<String>,
    pub sex: Option<String>,
    pub internal_id: Option<String>,
    pub status: Option<String>,
    pub date: Option<NaiveDate>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub cause: Nullable<String>,
}

impl UpdateButcherCommand {
    pub fn has_changes(&self) -> bool {
        self.name.is_some()
            || self.breed.is_some()
            || self.sex.is_some()
            || self.internal_id.is_some()
            || self.status.is_some()
            || self.date.is_some()
            || self.cause.is_some()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.has_changes() {
            return Err(ValidationError::NoFieldsToUpdate);
        }
        validate_optional_text("name", self.name.as_deref(), 1, 100)?;
        validate_optional_text("breed", self.breed.as_deref(), 1, 100)?;
        validate_optional_text("sex", self.sex.as_deref(), 1, 20)?;
        validate_optional_text("internal_id", self.internal_id.as_deref(), 1, 50)?;
        validate_optional_text("status", self.status.as_deref(), 1, 50)?;
        validate_optional_text("cause", patch::text(&self.cause), 1, 255)?;
        Ok(())
    }
}

#[tracing::instrument(skip(pool, command), fields(butcher_id = %id))]
pub async fn handle(pool: PgPool, id: Uuid, command: UpdateButcherCommand) -> AppResult<Butcher> {
    command.validate()?;

    let mut scope = ScopedTransaction::begin(&pool, "update butcher record").await?;
    let outcome = update(scope.conn(), id, &command).await;
    let butcher = scope.finish(outcome).await?;

    tracing::info!("Butcher record updated successfully");

    Ok(butcher)
}

async fn update(
    conn: &mut PgConnection,
    id: Uuid,
    command: &UpdateButcherCommand,
) -> AppResult<Butcher> {
    if let Some(ref internal_id) = command.internal_id {
        ensure_internal_id_free(&mut *conn, internal_id, Some(id)).await?;
    }

    let sql = format!(
        "UPDATE butchers SET \
           name = COALESCE($2, name), \
           breed = COALESCE($3, breed), \
           sex = COALESCE($4, sex), \
           internal_id = COALESCE($5, internal_id), \
           status = COALESCE($6, status), \
           date = COALESCE($7, date), \
           cause = CASE WHEN $8 THEN $9 ELSE cause END, \
           updated_at = NOW() \
         WHERE id = $1 \
         RETURNING {}",
        butcher_columns()
    );

    sqlx::query_as::<_, Butcher>(&sql)
        .bind(id)
        .bind(&command.name)
        .bind(&command.breed)
        .bind(&command.sex)
        .bind(&command.internal_id)
        .bind(&command.status)
        .bind(command.date)
        .bind(patch::is_present(&command.cause))
        .bind(patch::value(&command.cause))
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            let internal_id = command.internal_id.as_deref().unwrap_or_default();
            map_unique_violation(e, &internal_id_taken(internal_id))
        })?
        .ok_or_else(|| AppError::not_found("Butcher record", id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_patch_is_rejected() {
        assert_eq!(
            UpdateButcherCommand::default().validate(),
            Err(ValidationError::NoFieldsToUpdate)
        );
    }

    #[test]
    fn test_long_internal_id_is_rejected() {
        let cmd = UpdateButcherCommand {
            internal_id: Some("B".repeat(51)),
            ..Default::default()
        };
        assert!(matches!(
            cmd.validate(),
            Err(ValidationError::Length {
                field: "internal_id",
                ..
            })
        ));
    }
}
