//! Get group query

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    features::groups::model::{select_groups, Group},
};

#[tracing::instrument(skip(pool), fields(group_id = %id))]
pub async fn handle(pool: PgPool, id: Uuid) -> AppResult<Group> {
    let sql = format!("{} WHERE id = $1", select_groups());

    sqlx::query_as::<_, Group>(&sql)
        .bind(id)
        .fetch_optional(&pool)
        .await?
        .ok_or_else(|| AppError::not_found("Group", id))
}
