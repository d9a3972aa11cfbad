//! Breeding record API routes
//!
//! - `POST /api/v1/breeds` - Record a breeding
//! - `GET /api/v1/breeds` - List breeding records (`filters`, `page`, `limit`)
//! - `GET /api/v1/breeds/:id` - Get a breeding record
//! - `PATCH /api/v1/breeds/:id` - Update a breeding record
//! - `DELETE /api/v1/breeds/:id` - Delete a breeding record

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
    commands::{self, CreateBreedCommand, UpdateBreedCommand},
    model::Breed,
    queries,
};
use crate::{
    api::{ApiResponse, JsonBody, PathId, QueryParams},
    error::AppResult,
    features::shared::ListParams,
};

pub fn breeds_routes() -> Router<PgPool> {
    Router::new()
        .route("/", post(create_breed).get(list_breeds))
        .route(
            "/:id",
            get(get_breed).patch(update_breed).delete(delete_breed),
        )
}

async fn create_breed(
    State(pool): State<PgPool>,
    JsonBody(command): JsonBody<CreateBreedCommand>,
) -> AppResult<Response> {
    let breed = commands::create::handle(pool, command).await?;
    Ok(ApiResponse::success("Breed record created successfully", breed).created())
}

async fn list_breeds(
    State(pool): State<PgPool>,
    QueryParams(params): QueryParams<ListParams>,
) -> AppResult<ApiResponse<Vec<Breed>>> {
    let listing = queries::list::handle(pool, params).await?;
    Ok(ApiResponse::with_meta(
        "Breed records retrieved successfully",
        listing.items,
        listing.meta,
    ))
}

async fn get_breed(
    State(pool): State<PgPool>,
    PathId(id): PathId<Uuid>,
) -> AppResult<ApiResponse<Breed>> {
    let breed = queries::get::handle(pool, id).await?;
    Ok(ApiResponse::success("Breed record retrieved successfully", breed))
}

async fn update_breed(
    State(pool): State<PgPool>,
    PathId(id): PathId<Uuid>,
    JsonBody(command): JsonBody<UpdateBreedCommand>,
) -> AppResult<ApiResponse<Breed>> {
    let breed = commands::update::handle(pool, id, command).await?;
    Ok(ApiResponse::success("Breed record updated successfully", breed))
}

async fn delete_breed(State(pool): State<PgPool>, PathId(id): PathId<Uuid>) -> AppResult<StatusCode> {
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
        breeds_routes().with_state(lazy_pool())
    }

    #[tokio::test]
    async fn test_create_rejects_bad_date() {
        let (status, body) = send(
            app(),
            Method::POST,
            "/",
            Some(json!({
                "breeding_date": "yesterday",
                "breeding_method": "NATURAL",
                "breeding_cost": 100
            })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_update_rejects_zero_offspring() {
        let (status, body) = send(
            app(),
            Method::PATCH,
            &format!("/{}", Uuid::new_v4()),
            Some(json!({ "number_of_offspring": 0 })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "number_of_offspring must be greater than 0");
    }

    #[tokio::test]
    async fn test_limit_zero_is_rejected() {
        let (status, body) = send(app(), Method::GET, "/?page=1&limit=0", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Limit must be between 1 and 100");
    }
}
