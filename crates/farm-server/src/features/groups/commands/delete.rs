//! Delete group command

use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{AppError, AppResult};

#[tracing::instrument(skip(pool), fields(group_id = %id))]
pub async fn handle(pool: PgPool, id: Uuid) -> AppResult<()> {
    let result = sqlx::query("DELETE FROM groups WHERE id = $1")
        .bind(id)
        .execute(&pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::not_found("Group", id));
    }

    tracing::info!("Group deleted successfully");
    Ok(())
}
