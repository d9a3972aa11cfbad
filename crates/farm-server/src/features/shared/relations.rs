//! Existence checks for rows referenced by other resources

use sqlx::PgConnection;
use uuid::Uuid;

use crate::error::{AppError, AppResult};

/// Verify one livestock row exists
pub async fn ensure_livestock_exists(conn: &mut PgConnection, id: Uuid) -> AppResult<()> {
    let found: Option<Uuid> = sqlx::query_scalar("SELECT id FROM livestock WHERE id = $1")
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;

    match found {
        Some(_) => Ok(()),
        None => Err(AppError::not_found("Livestock", id)),
    }
}

/// Verify every id in `ids` names a livestock row. The error lists the
/// missing ids in request order.
pub async fn ensure_livestock_exist(conn: &mut PgConnection, ids: &[Uuid]) -> AppResult<()> {
    let wanted = dedup(ids);

    let found: Vec<Uuid> = sqlx::query_scalar("SELECT id FROM livestock WHERE id = ANY($1)")
        .bind(&wanted)
        .fetch_all(&mut *conn)
        .await?;

    let missing = missing_ids(&wanted, &found);
    if !missing.is_empty() {
        return Err(missing_error(&missing));
    }
    Ok(())
}

/// Drop repeated ids, keeping first occurrences in order
pub fn dedup(ids: &[Uuid]) -> Vec<Uuid> {
    let mut seen = Vec::with_capacity(ids.len());
    for id in ids {
        if !seen.contains(id) {
            seen.push(*id);
        }
    }
    seen
}

fn missing_ids(wanted: &[Uuid], found: &[Uuid]) -> Vec<Uuid> {
    wanted
        .iter()
        .filter(|id| !found.contains(id))
        .copied()
        .collect()
}

fn missing_error(missing: &[Uuid]) -> AppError {
    let list = missing
        .iter()
        .map(Uuid::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    AppError::NotFound(format!("Livestock with IDs [{}] not found", list))
}
