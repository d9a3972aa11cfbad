//! Livestock API routes
//!
//! - `POST /api/v1/livestock` - Register an animal
//! - `GET /api/v1/livestock` - List livestock (`filters`, `page`, `limit`)
//! - `GET /api/v1/livestock/:id` - Get one animal
//! - `PATCH /api/v1/livestock/:id` - Update an animal
//! - `DELETE /api/v1/livestock/:id` - Delete an animal

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
    commands::{self, CreateLivestockCommand, UpdateLivestockCommand},
    model::Livestock,
    queries,
};
use crate::{
    api::{ApiResponse, JsonBody, PathId, QueryParams},
    error::AppResult,
    features::shared::ListParams,
};

pub fn livestock_routes() -> Router<PgPool> {
    Router::new()
        .route("/", post(create_livestock).get(list_livestock))
        .route(
            "/:id",
            get(get_livestock)
                .patch(update_livestock)
                .delete(delete_livestock),
        )
}

async fn create_livestock(
    State(pool): State<PgPool>,
    JsonBody(command): JsonBody<CreateLivestockCommand>,
) -> AppResult<Response> {
    let livestock = commands::create::handle(pool, command).await?;
    Ok(ApiResponse::success("Livestock created successfully", livestock).created())
}

async fn list_livestock(
    State(pool): State<PgPool>,
    QueryParams(params): QueryParams<ListParams>,
) -> AppResult<ApiResponse<Vec<Livestock>>> {
    let listing = queries::list::handle(pool, params).await?;
    Ok(ApiResponse::with_meta(
        "Livestock retrieved successfully",
        listing.items,
        listing.meta,
    ))
}

async fn get_livestock(
    State(pool): State<PgPool>,
    PathId(id): PathId<Uuid>,
) -> AppResult<ApiResponse<Livestock>> {
    let livestock = queries::get::handle(pool, id).await?;
    Ok(ApiResponse::success("Livestock retrieved successfully", livestock))
}

async fn update_livestock(
    State(pool): State<PgPool>,
    PathId(id): PathId<Uuid>,
    JsonBody(command): JsonBody<UpdateLivestockCommand>,
) -> AppResult<ApiResponse<Livestock>> {
    let livestock = commands::update::handle(pool, id, command).await?;
    Ok(ApiResponse::success("Livestock updated successfully", livestock))
}

async fn delete_livestock(
    State(pool): State<PgPool>,
    PathId(id): PathId<Uuid>,
) -> AppResult<StatusCode> {
    commands::delete::handle(pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
