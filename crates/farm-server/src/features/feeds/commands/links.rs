//! Feed to livestock links, stored as `livestock.feed_id`

use sqlx::PgConnection;
use uuid::Uuid;

use crate::{
    error::AppResult,
    features::shared::relations::{dedup, ensure_livestock_exist},
};

/// Point every listed animal at `feed_id`. All ids must exist.
pub async fn link(conn: &mut PgConnection, feed_id: Uuid, livestock_ids: &[Uuid]) -> AppResult<()> {
    if livestock_ids.is_empty() {
        return Ok(());
    }

    ensure_livestock_exist(&mut *conn, livestock_ids).await?;

    let result = sqlx::query(
        "UPDATE livestock SET feed_id = $1, updated_at = NOW() WHERE id = ANY($2)",
    )
    .bind(feed_id)
    .bind(dedup(livestock_ids))
    .execute(&mut *conn)
    .await?;

    tracing::debug!(%feed_id, linked = result.rows_affected(), "Linked livestock to feed");
    Ok(())
}

/// Detach every animal currently on `feed_id`
pub async fn unlink_all(conn: &mut PgConnection, feed_id: Uuid) -> AppResult<()> {
    let result = sqlx::query(
        "UPDATE livestock SET feed_id = NULL, updated_at = NOW() WHERE feed_id = $1",
    )
    .bind(feed_id)
    .execute(&mut *conn)
    .await?;

    tracing::debug!(%feed_id, unlinked = result.rows_affected(), "Unlinked livestock from feed");
    Ok(())
}
