//! Delete livestock command

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    features::shared::error_helpers::map_foreign_key_violation,
};

/// Medication links cascade; a sale or butcher record blocks the delete.
#[tracing::instrument(skip(pool), fields(livestock_id = %id))]
pub async fn handle(pool: PgPool, id: Uuid) -> AppResult<()> {
    let result = sqlx::query("DELETE FROM livestock WHERE id = $1")
        .bind(id)
        .execute(&pool)
        .await
        .map_err(|e| {
            map_foreign_key_violation(
                e,
                &format!(
                    "Livestock with ID {} is referenced by a sale or butcher record",
                    id
                ),
            )
        })?;

    if result.rows_affected() == 0 {
        return Err(AppError::not_found("Livestock", id));
    }

    tracing::info!("Livestock deleted successfully");
    Ok(())
}
