//! Delete contact command

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    features::shared::error_helpers::map_foreign_key_violation,
};

/// Contacts referenced by a sale cannot be deleted
#[tracing::instrument(skip(pool), fields(contact_id = %id))]
pub async fn handle(pool: PgPool, id: Uuid) -> AppResult<()> {
    let result = sqlx::query("DELETE FROM contacts WHERE id = $1")
        .bind(id)
        .execute(&pool)
        .await
        .map_err(|e| {
            map_foreign_key_violation(
                e,
                &format!("Contact with ID {} is referenced by a sale record", id),
            )
        })?;

    if result.rows_affected() == 0 {
        return Err(AppError::not_found("Contact", id));
    }

    tracing::info!("Contact deleted successfully");
    Ok(())
}
