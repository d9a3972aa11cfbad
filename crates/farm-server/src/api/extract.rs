//! Request extractors that reject with the API error envelope
//!
//! Each wraps the matching axum extractor and turns its rejection into a
//! 400 `VALIDATION_ERROR` body instead of axum's plain-text response.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// `axum::Json` for request bodies
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct JsonBody<T>(pub T);

/// `axum::extract::Query` for list parameters such as `page` and `limit`
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct QueryParams<T>(pub T);

/// `axum::extract::Path` for record ids
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct PathId<T>(pub T);
