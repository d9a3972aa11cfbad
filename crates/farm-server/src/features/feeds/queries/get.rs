//! Feed record lookups

use sqlx::{PgExecutor, PgPool};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    features::feeds::model::{select_feeds, Feed},
};

#[tracing::instrument(skip(pool), fields(feed_id = %id))]
pub async fn handle(pool: PgPool, id: Uuid) -> AppResult<Feed> {
    find(&pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Feed record", id))
}

/// Load a feed with its linked livestock ids. Runs on a pool or inside a
/// transaction.
pub async fn find<'e, E>(executor: E, id: Uuid) -> AppResult<Option<Feed>>
where
    E: PgExecutor<'e>,
{
    let sql = format!("{} WHERE feeds.id = $1", select_feeds());

    let feed = sqlx::query_as::<_, Feed>(&sql)
        .bind(id)
        .fetch_optional(executor)
        .await?;

    Ok(feed)
}
