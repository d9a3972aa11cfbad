//! Delete sale record command

use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{AppError, AppResult};

/// The buyer and point of contact are kept.
#[tracing::instrument(skip(pool), fields(sell_id = %id))]
pub async fn handle(pool: PgPool, id: Uuid) -> AppResult<()> {
    let result = sqlx::query("DELETE FROM sells WHERE id = $1")
        .bind(id)
        .execute(&pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::not_found("Sell record", id));
    }

    tracing::info!("Sell record deleted successfully");
    Ok(())
}
