//! Server error taxonomy and its HTTP mapping

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use farm_common::FilterError;
use thiserror::Error;

use crate::{api::response::ErrorResponse, features::shared::validation::ValidationError};

/// Message returned to clients for every 500
pub const INTERNAL_ERROR_MESSAGE: &str = "An internal error occurred";

/// Result type alias for handlers, commands and queries
pub type AppResult<T> = Result<T, AppError>;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Filter(#[from] FilterError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn not_found(resource: &str, id: impl std::fmt::Display) -> Self {
        Self::NotFound(format!("{} with ID {} not found", resource, id))
    }

    /// Errors that describe the request rather than a server fault. These
    /// pass through a rolled-back transaction unchanged.
    pub fn is_domain(&self) -> bool {
        !matches!(self, AppError::Database(_) | AppError::Internal(_))
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Filter(_) | AppError::Validation(_) | AppError::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            },
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AppError::Filter(e) => e.code(),
            AppError::Validation(_) | AppError::BadRequest(_) => "VALIDATION_ERROR",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::Conflict(_) => "CONFLICT",
            AppError::Database(_) | AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            AppError::Database(ref e) => {
                tracing::error!(error = ?e, "Database error");
                ErrorResponse::new(self.code(), INTERNAL_ERROR_MESSAGE)
            },
            AppError::Internal(ref message) => {
                tracing::error!(%message, "Internal error");
                ErrorResponse::new(self.code(), INTERNAL_ERROR_MESSAGE)
            },
            AppError::Filter(ref e) => match e.details() {
                Some(details) => ErrorResponse::with_details(e.code(), e.to_string(), details),
                None => ErrorResponse::new(e.code(), e.to_string()),
            },
            ref other => ErrorResponse::new(other.code(), other.to_string()),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use serde_json::Value;

    async fn body_json(response: Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_status_mapping() {
        let cases = [
            (
                AppError::Filter(FilterError::InvalidOperator {
                    operator: "x".to_string(),
                }),
                StatusCode::BAD_REQUEST,
            ),
            (
                AppError::Validation(ValidationError::NoFieldsToUpdate),
                StatusCode::BAD_REQUEST,
            ),
            (AppError::not_found("Livestock", "abc"), StatusCode::NOT_FOUND),
            (AppError::Conflict("dup".to_string()), StatusCode::CONFLICT),
            (
                AppError::Database(sqlx::Error::RowNotFound),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                AppError::Internal("boom".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, status) in cases {
            assert_eq!(error.status(), status, "{:?}", error);
        }
    }

    #[test]
    fn test_domain_classification() {
        assert!(AppError::not_found("Feed", 1).is_domain());
        assert!(AppError::Conflict("dup".to_string()).is_domain());
        assert!(!AppError::Database(sqlx::Error::PoolTimedOut).is_domain());
        assert!(!AppError::Internal("x".to_string()).is_domain());
    }

    #[tokio::test]
    async fn test_internal_errors_are_not_leaked() {
        let response = AppError::Internal("constraint xyz on table abc".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["message"], INTERNAL_ERROR_MESSAGE);
        assert_eq!(body["error"]["code"], "INTERNAL_ERROR");
        assert!(!body.to_string().contains("xyz"));
    }

    #[tokio::test]
    async fn test_filter_error_body_lists_alternatives() {
        let error = AppError::Filter(FilterError::UnknownField {
            field: "colour".to_string(),
            allowed: vec!["name".to_string(), "status".to_string()],
        });
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "UNKNOWN_FIELD");
        assert_eq!(
            body["message"],
            "Invalid field: colour. Allowed fields: name, status"
        );
        assert_eq!(body["error"]["details"]["allowed_fields"][1], "status");
    }

    #[tokio::test]
    async fn test_not_found_message() {
        let response = AppError::not_found("Group", "42").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert_eq!(body["message"], "Group with ID 42 not found");
    }
}
