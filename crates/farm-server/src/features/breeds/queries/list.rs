use sqlx::PgPool;

use crate::{
    error::AppResult,
    features::{
        breeds::model::{select_breeds, Breed, BREED_SCHEMA},
        shared::listing::{self, ListParams, Listing},
    },
};

#[tracing::instrument(skip(pool, params))]
pub async fn handle(pool: PgPool, params: ListParams) -> AppResult<Listing<Breed>> {
    listing::fetch(&pool, &BREED_SCHEMA, &select_breeds(), &params).await
}
