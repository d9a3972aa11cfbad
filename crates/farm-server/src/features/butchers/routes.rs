//! Butcher record API routes
//!
//! - `POST /api/v1/butchers` - Record a butchering
//! - `GET /api/v1/butchers` - List butcher records (`filters`, `page`, `limit`)
//! - `GET /api/v1/butchers/:id` - Get a butcher record
//! - `PATCH /api/v1/butchers/:id` - Update a butcher record
//! - `DELETE /api/v1/butchers/:id` - Delete a butcher record

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
    commands::{self, CreateButcherCommand, UpdateButcherCommand},
    model::Butcher,
    queries,
};
use crate::{
    api::{ApiResponse, JsonBody, PathId, QueryParams},
    error::AppResult,
    features::shared::ListParams,
};

pub fn butchers_routes() -> Router<PgPool> {
    Router::new()
        .route("/", post(create_butcher).get(list_butchers))
        .route(
            "/:id",
            get(get_butcher).patch(update_butcher).delete(delete_butcher),
        )
}

async fn create_butcher(
    State(pool): State<PgPool>,
    JsonBody(command): JsonBody<CreateButcherCommand>,
) -> AppResult<Response> {
    let butcher = commands::create::handle(pool, command).await?;
    Ok(ApiResponse::success("Butcher record created successfully", butcher).created())
}

async fn list_butchers(
    State(pool): State<PgPool>,
    QueryParams(params): QueryParams<ListParams>,
) -> AppResult<ApiResponse<Vec<Butcher>>> {
    let listing = queries::list::handle(pool, params).await?;
    Ok(ApiResponse::with_meta(
        "Butcher records retrieved successfully",
        listing.items,
        listing.meta,
    ))
}

async fn get_butcher(
    State(pool): State<PgPool>,
    PathId(id): PathId<Uuid>,
) -> AppResult<ApiResponse<Butcher>> {
    let butcher = queries::get::handle(pool, id).await?;
    Ok(ApiResponse::success("Butcher record retrieved successfully", butcher))
}

async fn update_butcher(
    State(pool): State<PgPool>,
    PathId(id): PathId<Uuid>,
    JsonBody(command): JsonBody<UpdateButcherCommand>,
) -> AppResult<ApiResponse<Butcher>> {
    let butcher = commands::update::handle(pool, id, command).await?;
    Ok(ApiResponse::success("Butcher record updated successfully", butcher))
}

async fn delete_butcher(
    State(pool): State<PgPool>,
    PathId(id): PathId<Uuid>,
) -> AppResult<StatusCode> {
    commands::delete::handle(pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
