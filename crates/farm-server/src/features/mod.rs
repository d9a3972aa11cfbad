//! Feature modules implementing the farm records API
//!
//! Each resource is a vertical slice with its own commands, queries, model
//! and routes. All of them share the listing engine and helpers in
//! [`shared`].
//!
//! # Features
//!
//! - **livestock**: the animals every other record refers to
//! - **breeds**: breeding records
//! - **feeds**: feed records, linked to livestock through `feed_id`
//! - **sells**: sales, which also record the buyer and point of contact
//! - **butchers**: butcher records, one per animal
//! - **contacts**: buyers, brokers and other people
//! - **groups**: named groups of livestock
//! - **medications**: treatments given to one or more animals

pub mod breeds;
pub mod butchers;
pub mod contacts;
pub mod feeds;
pub mod groups;
pub mod livestock;
pub mod medications;
pub mod sells;
pub mod shared;

use axum::Router;
use sqlx::PgPool;

/// Build the `/api/v1` router for every resource
pub fn router(pool: PgPool) -> Router {
    Router::new()
        .nest(
            "/livestock",
            livestock::livestock_routes().with_state(pool.clone()),
        )
        .nest("/breeds", breeds::breeds_routes().with_state(pool.clone()))
        .nest("/feeds", feeds::feeds_routes().with_state(pool.clone()))
        .nest("/sells", sells::sells_routes().with_state(pool.clone()))
        .nest(
            "/butchers",
            butchers::butchers_routes().with_state(pool.clone()),
        )
        .nest(
            "/contacts",
            contacts::contacts_routes().with_state(pool.clone()),
        )
        .nest("/groups", groups::groups_routes().with_state(pool.clone()))
        .nest(
            "/medications",
            medications::medications_routes().with_state(pool),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::shared::test_helpers::{lazy_pool, send};
    use axum::http::{Method, StatusCode};
    use serde_json::json;

    #[tokio::test]
    async fn test_every_resource_is_mounted() {
        for resource in [
            "livestock",
            "breeds",
            "feeds",
            "sells",
            "butchers",
            "contacts",
            "groups",
            "medications",
        ] {
            let uri = format!("/{}/{}", resource, uuid::Uuid::new_v4());
            let (status, body) = send(router(lazy_pool()), Method::PATCH, &uri, Some(json!({}))).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{}", resource);
            assert_eq!(body["message"], "No fields to update", "{}", resource);
        }
    }

    #[tokio::test]
    async fn test_unknown_resource_is_404() {
        let (status, _) = send(router(lazy_pool()), Method::GET, "/tractors", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
