//! Create feed record command
//!
//! The feed row and the livestock links are written in one transaction. If
//! any listed animal is missing, nothing is written.

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
        shared::validation::{
            validate_non_negative, validate_optional_text, validate_text, ValidationError,
        },
    },
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateFeedCommand {
    pub feed_type: String,
    pub quantity: f64,
    pub feeding_date: NaiveDate,
    pub cost: f64,
    pub note: Option<String>,
    /// Animals put on this feed
    pub livestock_ids: Vec<Uuid>,
}

impl CreateFeedCommand {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_text("feed_type", &self.feed_type, 1, 100)?;
        validate_non_negative("quantity", self.quantity)?;
        validate_non_negative("cost", self.cost)?;
        validate_optional_text("note", self.note.as_deref(), 0, 1000)?;
        Ok(())
    }
}

#[tracing::instrument(
    skip(pool, command),
    fields(feed_type = %command.feed_type, livestock = command.livestock_ids.len())
)]
pub async fn handle(pool: PgPool, command: CreateFeedCommand) -> AppResult<Feed> {
    command.validate()?;

    let mut scope = ScopedTransaction::begin(&pool, "create feed record").await?;
    let outcome = create(scope.conn(), &command).await;
    let feed = scope.finish(outcome).await?;

    tracing::info!(feed_id = %feed.id, "Feed record created successfully");

    Ok(feed)
}

async fn create(conn: &mut PgConnection, command: &CreateFeedCommand) -> AppResult<Feed> {
    let id: Uuid = sqlx::query_scalar(
        "INSERT INTO feeds (feed_type, quantity, feeding_date, cost, note) \
         VALUES ($1, $2::NUMERIC, $3, $4::NUMERIC, $5) \
         RETURNING id",
    )
    .bind(&command.feed_type)
    .bind(command.quantity)
    .bind(command.feeding_date)
    .bind(command.cost)
    .bind(&command.note)
    .fetch_one(&mut *conn)
    .await?;

    links::link(&mut *conn, id, &command.livestock_ids).await?;

    find(&mut *conn, id)
        .await?
        .ok_or_else(|| AppError::Internal(format!("Feed {} vanished after insert", id)))
}
