use sqlx::PgPool;

use crate::{
    error::AppResult,
    features::{
        feeds::model::{select_feeds, Feed, FEED_SCHEMA},
        shared::listing::{self, ListParams, Listing},
    },
};

#[tracing::instrument(skip(pool, params))]
pub async fn handle(pool: PgPool, params: ListParams) -> AppResult<Listing<Feed>> {
    listing::fetch(&pool, &FEED_SCHEMA, &select_feeds(), &params).await
}
