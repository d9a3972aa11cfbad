//! Get livestock query

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    features::livestock::model::{select_livestock, Livestock},
};

#[tracing::instrument(skip(pool), fields(livestock_id = %id))]
pub async fn handle(pool: PgPool, id: Uuid) -> AppResult<Livestock> {
    let sql = format!("{} WHERE id = $1", select_livestock());

    sqlx::query_as::<_, Livestock>(&sql)
        .bind(id)
        .fetch_optional(&pool)
        .await?
        .ok_or_else(|| AppError::not_found("Livestock", id))
}
