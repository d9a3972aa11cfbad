//! Medication record API routes
//!
//! - `POST /api/v1/medications` - Record a treatment
//! - `GET /api/v1/medications` - List medication records (`filters`, `page`, `limit`)
//! - `GET /api/v1/medications/:id` - Get a medication record
//! - `PATCH /api/v1/medications/:id` - Update a medication record
//! - `DELETE /api/v1/medications/:id` - Delete a medication record

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
    commands::{self, CreateMedicationCommand, UpdateMedicationCommand},
    model::Medication,
    queries,
};
use crate::{
    api::{ApiResponse, JsonBody, PathId, QueryParams},
    error::AppResult,
    features::shared::ListParams,
};

pub fn medications_routes() -> Router<PgPool> {
    Router::new()
        .route("/", post(create_medication).get(list_medications))
        .route(
            "/:id",
            get(get_medication)
                .patch(update_medication)
                .delete(delete_medication),
        )
}

async fn create_medication(
    State(pool): State<PgPool>,
    JsonBody(command): JsonBody<CreateMedicationCommand>,
) -> AppResult<Response> {
    let medication = commands::create::handle(pool, command).await?;
    Ok(ApiResponse::success("Medication record created successfully", medication).created())
}

async fn list_medications(
    State(pool): State<PgPool>,
    QueryParams(params): QueryParams<ListParams>,
) -> AppResult<ApiResponse<Vec<Medication>>> {
    let listing = queries::list::handle(pool, params).await?;
    Ok(ApiResponse::with_meta(
        "Medication records retrieved successfully",
        listing.items,
        listing.meta,
    ))
}

async fn get_medication(
    State(pool): State<PgPool>,
    PathId(id): PathId<Uuid>,
) -> AppResult<ApiResponse<Medication>> {
    let medication = queries::get::handle(pool, id).await?;
    Ok(ApiResponse::success("Medication record retrieved successfully", medication))
}

async fn update_medication(
    State(pool): State<PgPool>,
    PathId(id): PathId<Uuid>,
    JsonBody(command): JsonBody<UpdateMedicationCommand>,
) -> AppResult<ApiResponse<Medication>> {
    let medication = commands::update::handle(pool, id, command).await?;
    Ok(ApiResponse::success("Medication record updated successfully", medication))
}

async fn delete_medication(
    State(pool): State<PgPool>,
    PathId(id): PathId<Uuid>,
) -> AppResult<StatusCode> {
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
        medications_routes().with_state(lazy_pool())
    }

    #[tokio::test]
    async fn test_create_requires_livestock() {
        let (status, body) = send(
            app(),
            Method::POST,
            "/",
            Some(json!({
                "date": "2025-04-02",
                "brand": "Zoetis",
                "medication_brand": "Ivomec",
                "name": "Ivermectin",
                "livestock_ids": []
            })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "livestock_ids must contain at least one ID");
    }

    #[tokio::test]
    async fn test_filter_on_missing_operator_is_malformed() {
        let filters = encode_filters(&json!([{ "field": "name", "value": "Ivermectin" }]));
        let (status, body) = send(app(), Method::GET, &format!("/?filters={}", filters), None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "MALFORMED_FILTER");
        assert_eq!(body["error"]["details"]["index"], 0);
    }
}
