//! List livestock query

use sqlx::PgPool;

use crate::{
    error::AppResult,
    features::{
        livestock::model::{select_livestock, Livestock, LIVESTOCK_SCHEMA},
        shared::listing::{self, ListParams, Listing},
    },
};

/// List livestock, newest first, narrowed by `filters` and optionally paged
#[tracing::instrument(skip(pool, params))]
pub async fn handle(pool: PgPool, params: ListParams) -> AppResult<Listing<Livestock>> {
    listing::fetch(&pool, &LIVESTOCK_SCHEMA, &select_livestock(), &params).await
}
