//! Feed record API routes
//!
//! - `POST /api/v1/feeds` - Record a feeding and link livestock
//! - `GET /api/v1/feeds` - List feed records (`filters`, `page`, `limit`)
//! - `GET /api/v1/feeds/:id` - Get a feed record
//! - `PATCH /api/v1/feeds/:id` - Update a feed record
//! - `DELETE /api/v1/feeds/:id` - Delete a feed record

use axum::{
    extract::State,
    http::StatusCode,
    response::Response,
    routing::{get, post},
    Router,
};
use sqlx::PgPool;
use uuid::Uuid;

use super::{
    commands::{self, CreateFeedCommand, UpdateFeedCommand},
    model::Feed,
    queries,
};
use crate::{
    api::{ApiResponse, JsonBody, PathId, QueryParams},
    error::AppResult,
    features::shared::ListParams,
};

pub fn feeds_routes() -> Router<PgPool> {
    Router::new()
        .route("/", post(create_feed).get(list_feeds))
        .route("/:id", get(get_feed).patch(update_feed).delete(delete_feed))
}

async fn create_feed(
    State(pool): State<PgPool>,
    JsonBody(command): JsonBody<CreateFeedCommand>,
) -> AppResult<Response> {
    let feed = commands::create::handle(pool, command).await?;
    Ok(ApiResponse::success("Feed record created successfully", feed).created())
}

async fn list_feeds(
    State(pool): State<PgPool>,
    QueryParams(params): QueryParams<ListParams>,
) -> AppResult<ApiResponse<Vec<Feed>>> {
    let listing = queries::list::handle(pool, params).await?;
    Ok(ApiResponse::with_meta(
        "Feed records retrieved successfully",
        listing.items,
        listing.meta,
    ))
}

async fn get_feed(State(pool): State<PgPool>, PathId(id): PathId<Uuid>) -> AppResult<ApiResponse<Feed>> {
    let feed = queries::get::handle(pool, id).await?;
    Ok(ApiResponse::success("Feed record retrieved successfully", feed))
}

async fn update_feed(
    State(pool): State<PgPool>,
    PathId(id): PathId<Uuid>,
    JsonBody(command): JsonBody<UpdateFeedCommand>,
) -> AppResult<ApiResponse<Feed>> {
    let feed = commands::update::handle(pool, id, command).await?;
    Ok(ApiResponse::success("Feed record updated successfully", feed))
}

async fn delete_feed(State(pool): State<PgPool>, PathId(id): PathId<Uuid>) -> AppResult<StatusCode> {
    commands::delete::handle(pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::shared::test_helpers::{encode_filters, lazy_pool, send};
    use axum::http::Method;
    use serde_json::json;

    fn app() -> Router {
        feeds_routes().with_state(lazy_pool())
    }

    #[tokio::test]
    async fn test_create_rejects_negative_quantity() {
        let (status, body) = send(
            app(),
            Method::POST,
            "/",
            Some(json!({
                "feed_type": "Silage",
                "quantity": -1,
                "feeding_date": "2025-05-01",
                "cost": 10,
                "livestock_ids": []
            })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "quantity cannot be negative");
    }

    #[tokio::test]
    async fn test_create_rejects_non_uuid_livestock_id() {
        let (status, body) = send(
            app(),
            Method::POST,
            "/",
            Some(json!({
                "feed_type": "Silage",
                "quantity": 5,
                "feeding_date": "2025-05-01",
                "cost": 10,
                "livestock_ids": ["cow-1"]
            })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_livestock_ids_cannot_be_filtered() {
        let filters = encode_filters(&json!([
            { "field": "livestock_ids", "operator": "eq", "value": Uuid::nil() }
        ]));
        let (status, body) = send(app(), Method::GET, &format!("/?filters={}", filters), None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "UNKNOWN_FIELD");
    }
}
