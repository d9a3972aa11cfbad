use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    features::sells::model::{select_sells, Sell},
};

#[tracing::instrument(skip(pool), fields(sell_id = %id))]
pub async fn handle(pool: PgPool, id: Uuid) -> AppResult<Sell> {
    let sql = format!("{} WHERE id = $1", select_sells());

    sqlx::query_as::<_, Sell>(&sql)
        .bind(id)
        .fetch_optional(&pool)
        .await?
        .ok_or_else(|| AppError::not_found("Sell record", id))
}
