//! Group API routes
//!
//! - `POST /api/v1/groups` - Create a group
//! - `GET /api/v1/groups` - List groups (`filters`, `page`, `limit`)
//! - `GET /api/v1/groups/:id` - Get a group
//! - `PATCH /api/v1/groups/:id` - Update a group
//! - `DELETE /api/v1/groups/:id` - Delete a group

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
    commands::{self, CreateGroupCommand, UpdateGroupCommand},
    model::Group,
    queries,
};
use crate::{
    api::{ApiResponse, JsonBody, PathId, QueryParams},
    error::AppResult,
    features::shared::ListParams,
};

pub fn groups_routes() -> Router<PgPool> {
    Router::new()
        .route("/", post(create_group).get(list_groups))
        .route(
            "/:id",
            get(get_group).patch(update_group).delete(delete_group),
        )
}

async fn create_group(
    State(pool): State<PgPool>,
    JsonBody(command): JsonBody<CreateGroupCommand>,
) -> AppResult<Response> {
    let group = commands::create::handle(pool, command).await?;
    Ok(ApiResponse::success("Group created successfully", group).created())
}

async fn list_groups(
    State(pool): State<PgPool>,
    QueryParams(params): QueryParams<ListParams>,
) -> AppResult<ApiResponse<Vec<Group>>> {
    let listing = queries::list::handle(pool, params).await?;
    Ok(ApiResponse::with_meta(
        "Groups retrieved successfully",
        listing.items,
        listing.meta,
    ))
}

async fn get_group(
    State(pool): State<PgPool>,
    PathId(id): PathId<Uuid>,
) -> AppResult<ApiResponse<Group>> {
    let group = queries::get::handle(pool, id).await?;
    Ok(ApiResponse::success("Group retrieved successfully", group))
}

async fn update_group(
    State(pool): State<PgPool>,
    PathId(id): PathId<Uuid>,
    JsonBody(command): JsonBody<UpdateGroupCommand>,
) -> AppResult<ApiResponse<Group>> {
    let group = commands::update::handle(pool, id, command).await?;
    Ok(ApiResponse::success("Group updated successfully", group))
}

async fn delete_group(State(pool): State<PgPool>, PathId(id): PathId<Uuid>) -> AppResult<StatusCode> {
    commands::delete::handle(pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::shared::test_helpers::{encode_filters, lazy_pool, send, send_raw};
    use axum::http::Method;
    use serde_json::json;

    fn app() -> Router {
        groups_routes().with_state(lazy_pool())
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_body() {
        let (status, body) = send(
            app(),
            Method::POST,
            "/",
            Some(json!({ "group_name": "", "group_id_number": "G-1" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_create_rejects_malformed_json() {
        let (status, body) = send_raw(app(), Method::POST, "/", "{ not json").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_list_rejects_unknown_filter_field() {
        let filters = encode_filters(&json!([
            { "field": "owner", "operator": "eq", "value": "x" }
        ]));
        let (status, body) = send(app(), Method::GET, &format!("/?filters={}", filters), None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "UNKNOWN_FIELD");
        assert!(body["message"]
            .as_str()
            .unwrap()
            .contains("group_id_number"));
    }

    #[tokio::test]
    async fn test_list_rejects_out_of_range_limit() {
        let (status, body) = send(app(), Method::GET, "/?page=1&limit=101", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_update_rejects_empty_patch() {
        let uri = format!("/{}", Uuid::new_v4());
        let (status, body) = send(app(), Method::PATCH, &uri, Some(json!({}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "No fields to update");
    }

    #[tokio::test]
    async fn test_get_rejects_non_uuid_id() {
        let (status, _) = send(app(), Method::GET, "/not-a-uuid", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
