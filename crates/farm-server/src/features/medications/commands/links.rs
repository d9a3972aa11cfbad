use sqlx::PgConnection;
use uuid::Uuid;

use crate::{
    error::AppResult,
    features::shared::relations::{dedup, ensure_livestock_exist},
};

/// Replace the treated animals of `medication_id` with `livestock_ids`.
/// Every id must name an existing animal.
pub async fn replace(
    conn: &mut PgConnection,
    medication_id: Uuid,
    livestock_ids: &[Uuid],
) -> AppResult<()> {
    ensure_livestock_exist(&mut *conn, livestock_ids).await?;

    sqlx::query("DELETE FROM medication_livestock WHERE medication_id = $1")
        .bind(medication_id)
        .execute(&mut *conn)
        .await?;

    sqlx::query(
        "INSERT INTO medication_livestock (medication_id, livestock_id) \
         SELECT $1, UNNEST($2::UUID[])",
    )
    .bind(medication_id)
    .bind(dedup(livestock_ids))
    .execute(&mut *conn)
    .await?;

    tracing::debug!(%medication_id, treated = livestock_ids.len(), "Replaced treated livestock");
    Ok(())
}
