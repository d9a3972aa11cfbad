//! Delete medication record command

use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{AppError, AppResult};

/// Join rows go with the record through `ON DELETE CASCADE`.
#[tracing::instrument(skip(pool), fields(medication_id = %id))]
pub async fn handle(pool: PgPool, id: Uuid) -> AppResult<()> {
    let result = sqlx::query("DELETE FROM medications WHERE id = $1")
        .bind(id)
        .execute(&pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::not_found("Medication record", id));
    }

    tracing::info!("Medication record deleted successfully");
    Ok(())
}
