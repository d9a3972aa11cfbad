use sqlx::PgPool;

use crate::{
    error::AppResult,
    features::{
        butchers::model::{select_butchers, Butcher, BUTCHER_SCHEMA},
        shared::listing::{self, ListParams, Listing},
    },
};

#[tracing::instrument(skip(pool, params))]
pub async fn handle(pool: PgPool, params: ListParams) -> AppResult<Listing<Butcher>> {
    listing::fetch(&pool, &BUTCHER_SCHEMA, &select_butchers(), &params).await
}
