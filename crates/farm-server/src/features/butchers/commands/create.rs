//! Create butcher record command
//!
//! Checks run inside the transaction, in this order: the internal id must be
//! free (409), the animal must exist (404), and the animal must not already
//! have a butcher record (409).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use crate::{
    db::ScopedTransaction,
    error::{AppError, AppResult},
    features::{
        butchers::model::{butcher_columns, Butcher},
        shared::{
            error_helpers::map_unique_violation,
            relations::ensure_livestock_exists,
            validation::{validate_optional_text, validate_text, ValidationError},
        },
    },
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateButcherCommand {
    pub livestock_id: Uuid,
    pub name: String,
    pub breed: String,
    pub sex: String,
    pub internal_id: String,
    pub status: String,
    pub date: NaiveDate,
    pub cause: Option<String>,
}

impl CreateButcherCommand {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_text("name", &self.name, 1, 100)?;
        validate_text("breed", &self.breed, 1, 100)?;
        validate_text("sex", &self.sex, 1, 20)?;
        validate_text("internal_id", &self.internal_id, 1, 50)?;
        validate_text("status", &self.status, 1, 50)?;
        validate_optional_text("cause", self.cause.as_deref(), 1, 255)?;
        Ok(())
    }
}

#[tracing::instrument(
    skip(pool, command),
    fields(livestock_id = %command.livestock_id, internal_id = %command.internal_id)
)]
pub async fn handle(pool: PgPool, command: CreateButcherCommand) -> AppResult<Butcher> {
    command.validate()?;

    let mut scope = ScopedTransaction::begin(&pool, "create butcher record").await?;
    let outcome = create(scope.conn(), &command).await;
    let butcher = scope.finish(outcome).await?;

    tracing::info!(butcher_id = %butcher.id, "Butcher record created successfully");

    Ok(butcher)
}

async fn create(conn: &mut PgConnection, command: &CreateButcherCommand) -> AppResult<Butcher> {
    ensure_internal_id_free(&mut *conn, &command.internal_id, None).await?;
    ensure_livestock_exists(&mut *conn, command.livestock_id).await?;

    let butchered: Option<Uuid> =
        sqlx::query_scalar("SELECT id FROM butchers WHERE livestock_id = $1")
            .bind(command.livestock_id)
            .fetch_optional(&mut *conn)
            .await?;
    if butchered.is_some() {
        return Err(AppError::Conflict(format!(
            "Livestock with ID {} is already butchered",
            command.livestock_id
        )));
    }

    let sql = format!(
        "INSERT INTO butchers (name, breed, sex, internal_id, status, date, cause, livestock_id) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
         RETURNING {}",
        butcher_columns()
    );

    sqlx::query_as::<_, Butcher>(&sql)
        .bind(&command.name)
        .bind(&command.breed)
        .bind(&command.sex)
        .bind(&command.internal_id)
        .bind(&command.status)
        .bind(command.date)
        .bind(&command.cause)
        .bind(command.livestock_id)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| map_unique_violation(e, &internal_id_taken(&command.internal_id)))
}

/// Fail with 409 when another record already uses `internal_id`.
/// `exclude` skips the record being updated.
pub(super) async fn ensure_internal_id_free(
    conn: &mut PgConnection,
    internal_id: &str,
    exclude: Option<Uuid>,
) -> AppResult<()> {
    let taken: Option<Uuid> = sqlx::query_scalar(
        "SELECT id FROM butchers WHERE internal_id = $1 AND ($2::UUID IS NULL OR id <> $2)",
    )
    .bind(internal_id)
    .bind(exclude)
    .fetch_optional(&mut *conn)
    .await?;

    match taken {
        Some(_) => Err(AppError::Conflict(internal_id_taken(internal_id))),
        None => Ok(()),
    }
}

pub(super) fn internal_id_taken(internal_id: &str) -> String {
    format!(
        "Livestock butchered with internal ID {} already exists",
        internal_id
    )
}
