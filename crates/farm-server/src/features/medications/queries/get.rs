use sqlx::{PgExecutor, PgPool};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    features::medications::model::{select_medications, Medication},
};

#[tracing::instrument(skip(pool), fields(medication_id = %id))]
pub async fn handle(pool: PgPool, id: Uuid) -> AppResult<Medication> {
    find(&pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Medication record", id))
}

/// Load a medication record with its treated livestock ids
pub async fn find<'e, E>(executor: E, id: Uuid) -> AppResult<Option<Medication>>
where
    E: PgExecutor<'e>,
{
    let sql = format!("{} WHERE medications.id = $1", select_medications());

    let medication = sqlx::query_as::<_, Medication>(&sql)
        .bind(id)
        .fetch_optional(executor)
        .await?;

    Ok(medication)
}
