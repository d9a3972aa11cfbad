use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{AppError, AppResult};

#[tracing::instrument(skip(pool), fields(butcher_id = %id))]
pub async fn handle(pool: PgPool, id: Uuid) -> AppResult<()> {
    let result = sqlx::query("DELETE FROM butchers WHERE id = $1")
        .bind(id)
        .execute(&pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::not_found("Butcher record", id));
    }

    tracing::info!("Butcher record deleted successfully");
    Ok(())
}
