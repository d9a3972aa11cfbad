//! Contact API routes
//!
//! - `POST /api/v1/contacts` - Create a contact
//! - `GET /api/v1/contacts` - List contacts (`filters`, `page`, `limit`)
//! - `GET /api/v1/contacts/:id` - Get a contact
//! - `PATCH /api/v1/contacts/:id` - Update a contact
//! - `DELETE /api/v1/contacts/:id` - Delete a contact

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
    commands::{self, CreateContactCommand, UpdateContactCommand},
    model::Contact,
    queries,
};
use crate::{
    api::{ApiResponse, JsonBody, PathId, QueryParams},
    error::AppResult,
    features::shared::ListParams,
};

pub fn contacts_routes() -> Router<PgPool> {
    Router::new()
        .route("/", post(create_contact).get(list_contacts))
        .route(
            "/:id",
            get(get_contact).patch(update_contact).delete(delete_contact),
        )
}

async fn create_contact(
    State(pool): State<PgPool>,
    JsonBody(command): JsonBody<CreateContactCommand>,
) -> AppResult<Response> {
    let contact = commands::create::handle(pool, command).await?;
    Ok(ApiResponse::success("Contact created successfully", contact).created())
}

async fn list_contacts(
    State(pool): State<PgPool>,
    QueryParams(params): QueryParams<ListParams>,
) -> AppResult<ApiResponse<Vec<Contact>>> {
    let listing = queries::list::handle(pool, params).await?;
    Ok(ApiResponse::with_meta(
        "Contacts retrieved successfully",
        listing.items,
        listing.meta,
    ))
}

async fn get_contact(
    State(pool): State<PgPool>,
    PathId(id): PathId<Uuid>,
) -> AppResult<ApiResponse<Contact>> {
    let contact = queries::get::handle(pool, id).await?;
    Ok(ApiResponse::success("Contact retrieved successfully", contact))
}

async fn update_contact(
    State(pool): State<PgPool>,
    PathId(id): PathId<Uuid>,
    JsonBody(command): JsonBody<UpdateContactCommand>,
) -> AppResult<ApiResponse<Contact>> {
    let contact = commands::update::handle(pool, id, command).await?;
    Ok(ApiResponse::success("Contact updated successfully", contact))
}

async fn delete_contact(
    State(pool): State<PgPool>,
    PathId(id): PathId<Uuid>,
) -> AppResult<StatusCode> {
    commands::delete::handle(pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
