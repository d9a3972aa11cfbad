//! Delete feed record command

use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{AppError, AppResult};

/// Linked livestock keep their rows; their `feed_id` is cleared by the
/// foreign key.
#[tracing::instrument(skip(pool), fields(feed_id = %id))]
pub async fn handle(pool: PgPool, id: Uuid) -> AppResult<()> {
    let result = sqlx::query("DELETE FROM feeds WHERE id = $1")
        .bind(id)
        .execute(&pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::not_found("Feed record", id));
    }

    tracing::info!("Feed record deleted successfully");
    Ok(())
}
