//! List groups query

use sqlx::PgPool;

use crate::{
    error::AppResult,
    features::{
        groups::model::{select_groups, Group, GROUP_SCHEMA},
        shared::listing::{self, ListParams, Listing},
    },
};

#[tracing::instrument(skip(pool, params))]
pub async fn handle(pool: PgPool, params: ListParams) -> AppResult<Listing<Group>> {
    listing::fetch(&pool, &GROUP_SCHEMA, &select_groups(), &params).await
}
