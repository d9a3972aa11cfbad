use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    features::breeds::model::{select_breeds, Breed},
};

#[tracing::instrument(skip(pool), fields(breed_id = %id))]
pub async fn handle(pool: PgPool, id: Uuid) -> AppResult<Breed> {
    let sql = format!("{} WHERE id = $1", select_breeds());

    sqlx::query_as::<_, Breed>(&sql)
        .bind(id)
        .fetch_optional(&pool)
        .await?
        .ok_or_else(|| AppError::not_found("Breed record", id))
}
