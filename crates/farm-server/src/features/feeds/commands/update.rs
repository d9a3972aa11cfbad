//! Update feed record command
//!
//! When `livestock_ids` is present it replaces the linked set: every current
//! link is dropped, the new ids are verified, then linked.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use super::links;
use crate::{
    db::ScopedTransaction,
    error::{AppError, AppResult},
    features::{
        feeds::{model::Feed, queries::get::find},
        shared::{
            patch::{self, Nullable},
            validation::{validate_non_negative, validate_optional_text, ValidationError},
        },
    },
};

/// Partial update. `note: null` clears the note.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateFeedCommand {
    pub feed_type: Option<String>,
    pub quantity: Option<f64>,
    pub feeding_date: Option<NaiveDate>,
    pub cost: Option<f64>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub note: Nullable<String>,
    pub livestock_ids: Option<Vec<Uuid>>,
}

impl UpdateFeedCommand {
    pub fn has_changes(&self) -> bool {
        self.feed_type.is_some()
            || self.quantity.is_some()
            || self.feeding_date.is_some()
            || self.cost.is_some()
            || self.note.is_some()
            || self.livestock_ids.is_some()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.has_changes() {
            return Err(ValidationError::NoFieldsToUpdate);
        }
        validate_optional_text("feed_type", self.feed_type.as_deref(), 1, 100)?;
        validate_optional_text("note", patch::text(&self.note), 0, 1000)?;
        if let Some(quantity) = self.quantity {
            validate_non_negative("quantity", quantity)?;
        }
        if let Some(cost) = self.cost {
            validate_non_negative("cost", cost)?;
        }
        Ok(())
    }
}

#[tracing::instrument(skip(pool, command), fields(feed_id = %id))]
pub async fn handle(pool: PgPool, id: Uuid, command: UpdateFeedCommand) -> AppResult<Feed> {
    command.validate()?;

    let mut scope = ScopedTransaction::begin(&pool, "update feed record").await?;
    let outcome = update(scope.conn(), id, &command).await;
    let feed = scope.finish(outcome).await?;

    tracing::info!("Feed record updated successfully");

    Ok(feed)
}

async fn update(conn: &mut PgConnection, id: Uuid, command: &UpdateFeedCommand) -> AppResult<Feed> {
    let updated: Option<Uuid> = sqlx::query_scalar(
        "UPDATE feeds SET \
           feed_type = COALESCE($2, feed_type), \
           quantity = COALESCE($3::NUMERIC, quantity), \
           feeding_date = COALESCE($4, feeding_date), \
           cost = COALESCE($5::NUMERIC, cost), \
           note = CASE WHEN $6 THEN $7 ELSE note END, \
           updated_at = NOW() \
         WHERE id = $1 \
         RETURNING id",
    )
    .bind(id)
    .bind(&command.feed_type)
    .bind(command.quantity)
    .bind(command.feeding_date)
    .bind(command.cost)
    .bind(patch::is_present(&command.note))
    .bind(patch::value(&command.note))
    .fetch_optional(&mut *conn)
    .await?;

    if updated.is_none() {
        return Err(AppError::not_found("Feed record", id));
    }

    if let Some(ref livestock_ids) = command.livestock_ids {
        links::unlink_all(&mut *conn, id).await?;
        links::link(&mut *conn, id, livestock_ids).await?;
    }

    find(&mut *conn, id)
        .await?
        .ok_or_else(|| AppError::not_found("Feed record", id))
}
