use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    features::butchers::model::{select_butchers, Butcher},
};

#[tracing::instrument(skip(pool), fields(butcher_id = %id))]
pub async fn handle(pool: PgPool, id: Uuid) -> AppResult<Butcher> {
    let sql = format!("{} WHERE id = $1", select_butchers());

    sqlx::query_as::<_, Butcher>(&sql)
        .bind(id)
        .fetch_optional(&pool)
        .await?
        .ok_or_else(|| AppError::not_found("Butcher record", id))
}
