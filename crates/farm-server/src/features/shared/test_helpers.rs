//! Test helpers for route and model tests
//!
//! Route tests run against a lazily connected pool. They only exercise
//! paths that fail validation before any SQL runs, so no database is
//! needed.
//!
//! # Examples
//!
//! ```rust,ignore
//! use farm_server::features::shared::test_helpers::*;
//!
//! let app = groups_routes().with_state(lazy_pool());
//! let (status, body) = send(app, Method::PATCH, &format!("/{}", Uuid::new_v4()), Some(json!({}))).await;
//! assert_eq!(status, StatusCode::BAD_REQUEST);
//! ```

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use farm_common::filter::EntitySchema;
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::{postgres::PgPoolOptions, PgPool};
use tower::ServiceExt;

/// A pool that never connects unless a query is actually run
pub fn lazy_pool() -> PgPool {
    PgPoolOptions::new()
        .connect_lazy("postgresql://localhost/farm_records_test")
        .unwrap()
}

/// Send one request through `router` and decode the body.
///
/// Empty bodies decode to `Value::Null`; non-JSON bodies (plain-text
/// handlers) decode to `Value::String`.
pub async fn send(
    router: Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => request
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => request.body(Body::empty()).unwrap(),
    };

    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };

    (status, value)
}

/// Send a raw, possibly malformed, JSON body
pub async fn send_raw(router: Router, method: Method, uri: &str, body: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

/// Percent-encode a `filters` value for a query string
pub fn encode_filters(filters: &Value) -> String {
    let raw = filters.to_string();
    let mut encoded = String::with_capacity(raw.len() * 3);
    for byte in raw.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                encoded.push(byte as char)
            },
            _ => encoded.push_str(&format!("%{:02X}", byte)),
        }
    }
    encoded
}

/// Every registered filter column must be selected by the entity's column
/// list, either as-is or through an `AS` alias.
pub fn assert_columns_selected(schema: &EntitySchema, columns_sql: &str) {
    let selected: Vec<&str> = columns_sql
        .split(',')
        .map(|column| {
            let column = column.trim();
            column.rsplit(" AS ").next().unwrap_or(column).trim()
        })
        .collect();

    for name in schema.columns.names() {
        assert!(
            selected.contains(&name),
            "{} is filterable on {} but not selected",
            name,
            schema.table
        );
    }
}
