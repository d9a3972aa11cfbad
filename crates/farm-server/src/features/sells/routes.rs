//! Sale record API routes
//!
//! - `POST /api/v1/sells` - Record a sale
//! - `GET /api/v1/sells` - List sales (`filters`, `page`, `limit`)
//! - `GET /api/v1/sells/:id` - Get a sale
//! - `PATCH /api/v1/sells/:id` - Update the sale terms
//! - `DELETE /api/v1/sells/:id` - Delete a sale

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
    commands::{self, CreateSellCommand, UpdateSellCommand},
    model::Sell,
    queries,
};
use crate::{
    api::{ApiResponse, JsonBody, PathId, QueryParams},
    error::AppResult,
    features::shared::ListParams,
};

pub fn sells_routes() -> Router<PgPool> {
    Router::new()
        .route("/", post(create_sell).get(list_sells))
        .route("/:id", get(get_sell).patch(update_sell).delete(delete_sell))
}

async fn create_sell(
    State(pool): State<PgPool>,
    JsonBody(command): JsonBody<CreateSellCommand>,
) -> AppResult<Response> {
    let sell = commands::create::handle(pool, command).await?;
    Ok(ApiResponse::success("Sell record created successfully", sell).created())
}

async fn list_sells(
    State(pool): State<PgPool>,
    QueryParams(params): QueryParams<ListParams>,
) -> AppResult<ApiResponse<Vec<Sell>>> {
    let listing = queries::list::handle(pool, params).await?;
    Ok(ApiResponse::with_meta(
        "Sell records retrieved successfully",
        listing.items,
        listing.meta,
    ))
}

async fn get_sell(State(pool): State<PgPool>, PathId(id): PathId<Uuid>) -> AppResult<ApiResponse<Sell>> {
    let sell = queries::get::handle(pool, id).await?;
    Ok(ApiResponse::success("Sell record retrieved successfully", sell))
}

async fn update_sell(
    State(pool): State<PgPool>,
    PathId(id): PathId<Uuid>,
    JsonBody(command): JsonBody<UpdateSellCommand>,
) -> AppResult<ApiResponse<Sell>> {
    let sell = commands::update::handle(pool, id, command).await?;
    Ok(ApiResponse::success("Sell record updated successfully", sell))
}

async fn delete_sell(State(pool): State<PgPool>, PathId(id): PathId<Uuid>) -> AppResult<StatusCode> {
    commands::delete::handle(pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::shared::test_helpers::{lazy_pool, send};
    use axum::http::Method;
    use serde_json::json;

    fn app() -> Router {
        sells_routes().with_state(lazy_pool())
    }

    #[tokio::test]
    async fn test_create_requires_livestock_id() {
        let (status, body) = send(
            app(),
            Method::POST,
            "/",
            Some(json!({ "price": 1200, "payment_method": "CASH" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_get_rejects_non_uuid_id() {
        let (status, _) = send(app(), Method::GET, "/sale-42", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_update_rejects_empty_patch() {
        let (status, body) = send(
            app(),
            Method::PATCH,
            &format!("/{}", Uuid::new_v4()),
            Some(json!({})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "No fields to update");
    }
}
