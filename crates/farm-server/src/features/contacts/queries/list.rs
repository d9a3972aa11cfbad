//! List contacts query

use sqlx::PgPool;

use crate::{
    error::AppResult,
    features::{
        contacts::model::{select_contacts, Contact, CONTACT_SCHEMA},
        shared::listing::{self, ListParams, Listing},
    },
};

#[tracing::instrument(skip(pool, params))]
pub async fn handle(pool: PgPool, params: ListParams) -> AppResult<Listing<Contact>> {
    listing::fetch(&pool, &CONTACT_SCHEMA, &select_contacts(), &params).await
}
