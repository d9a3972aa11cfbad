use sqlx::PgPool;

use crate::{
    error::AppResult,
    features::{
        sells::model::{select_sells, Sell, SELL_SCHEMA},
        shared::listing::{self, ListParams, Listing},
    },
};

#[tracing::instrument(skip(pool, params))]
pub async fn handle(pool: PgPool, params: ListParams) -> AppResult<Listing<Sell>> {
    listing::fetch(&pool, &SELL_SCHEMA, &select_sells(), &params).await
}
