//! Contact lookups

use sqlx::{PgExecutor, PgPool};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    features::contacts::model::{select_contacts, Contact},
};

#[tracing::instrument(skip(pool), fields(contact_id = %id))]
pub async fn handle(pool: PgPool, id: Uuid) -> AppResult<Contact> {
    let sql = format!("{} WHERE id = $1", select_contacts());

    sqlx::query_as::<_, Contact>(&sql)
        .bind(id)
        .fetch_optional(&pool)
        .await?
        .ok_or_else(|| AppError::not_found("Contact", id))
}

/// Find a contact by its unique email
pub async fn find_by_email<'e, E>(executor: E, email: &str) -> AppResult<Option<Contact>>
where
    E: PgExecutor<'e>,
{
    let sql = format!("{} WHERE email = $1", select_contacts());

    let contact = sqlx::query_as::<_, Contact>(&sql)
        .bind(email)
        .fetch_optional(executor)
        .await?;

    Ok(contact)
}
