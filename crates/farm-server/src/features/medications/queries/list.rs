use sqlx::PgPool;

use crate::{
    error::AppResult,
    features::{
        medications::model::{select_medications, Medication, MEDICATION_SCHEMA},
        shared::listing::{self, ListParams, Listing},
    },
};

#[tracing::instrument(skip(pool, params))]
pub async fn handle(pool: PgPool, params: ListParams) -> AppResult<Listing<Medication>> {
    listing::fetch(&pool, &MEDICATION_SCHEMA, &select_medications(), &params).await
}
