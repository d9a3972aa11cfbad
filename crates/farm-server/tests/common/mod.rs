//! Common utilities for farm server integration tests
//!
//! Tests either take a pool from `#[sqlx::test]` (which needs
//! `DATABASE_URL`) or start their own PostgreSQL container with
//! [`TestPostgres`] (which needs Docker). Both apply the workspace
//! migrations before the test body runs.

#![allow(dead_code)]

use anyhow::{Context, Result};
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use farm_server::{api, config::Config};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use sqlx::{postgres::PgPoolOptions, PgPool};
use std::time::Duration;
use testcontainers::{core::IntoContainerPort, runners::AsyncRunner, ContainerAsync, ImageExt};
use testcontainers_modules::postgres::Postgres;
use tower::ServiceExt;
use tracing::{debug, info};
use uuid::Uuid;

// ============================================================================
// PostgreSQL Test Container
// ============================================================================

/// PostgreSQL container with migrations applied
pub struct TestPostgres {
    _container: ContainerAsync<Postgres>,
    pool: PgPool,
}

impl TestPostgres {
    pub async fn start() -> Result<Self> {
        info!("Starting PostgreSQL test container...");

        let container = Postgres::default()
            .with_tag("16-alpine")
            .start()
            .await
            .context("Failed to start PostgreSQL container")?;

        let host = container
            .get_host()
            .await
            .context("Failed to get container host")?;
        let port = container
            .get_host_port_ipv4(5432.tcp())
            .await
            .context("Failed to get container port")?;

        let connection_string =
            format!("postgresql://postgres:postgres@{}:{}/postgres", host, port);
        debug!("PostgreSQL connection: {}", connection_string);

        let pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(30))
            .connect(&connection_string)
            .await
            .context("Failed to connect to PostgreSQL")?;

        sqlx::migrate!("../../migrations")
            .run(&pool)
            .await
            .context("Failed to run migrations")?;

        Ok(Self {
            _container: container,
            pool,
        })
    }

    pub fn pool(&self) -> PgPool {
        self.pool.clone()
    }
}

// ============================================================================
// Requests
// ============================================================================

/// The full application router, mounted under `/api/v1`
pub fn app(pool: PgPool) -> Router {
    api::create_router(pool, &Config::default())
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => request
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => request.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

pub async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::POST, uri, Some(body)).await
}

/// `GET /api/v1/{resource}?filters=...` with an optional extra query
pub async fn list(app: &Router, resource: &str, filters: Value, extra: &str) -> (StatusCode, Value) {
    let encoded: String = filters
        .to_string()
        .bytes()
        .map(|b| match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                (b as char).to_string()
            },
            _ => format!("%{:02X}", b),
        })
        .collect();
    let mut uri = format!("/api/v1/{}?filters={}", resource, encoded);
    if !extra.is_empty() {
        uri.push('&');
        uri.push_str(extra);
    }
    get(app, &uri).await
}

pub fn names(body: &Value) -> Vec<String> {
    let mut names: Vec<String> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["name"].as_str().unwrap().to_string())
        .collect();
    names.sort();
    names
}

/// `group_name`s in response order
pub fn group_names(body: &Value) -> Vec<String> {
    body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["group_name"].as_str().unwrap().to_string())
        .collect()
}

// ============================================================================
// Fixtures
// ============================================================================

pub fn livestock_body(name: &str, status: &str, weight: f64, description: &str) -> Value {
    json!({
        "name": name,
        "breed": "Holstein",
        "sex": "female",
        "internal_id": Uuid::new_v4(),
        "status": status,
        "skin_color": "black and white",
        "neutered": "no",
        "is_breeding_stock": true,
        "weight": weight,
        "description": description,
        "tag_number": Uuid::new_v4(),
        "tag_color": "yellow",
        "tag_location": "left ear",
        "birth_date": "2022-03-14",
        "birth_weight": 38.5,
        "age_to_wean": 60,
        "origin": "home bred"
    })
}

/// Create a livestock record and return its id
pub async fn create_livestock(app: &Router, name: &str, status: &str, weight: f64) -> Uuid {
    let (status_code, body) = post(
        app,
        "/api/v1/livestock",
        livestock_body(name, status, weight, "Kept in the main barn"),
    )
    .await;
    assert_eq!(status_code, StatusCode::CREATED, "{}", body);
    body["data"]["id"].as_str().unwrap().parse().unwrap()
}

pub fn sell_body(livestock_id: Uuid, buyer_email: &str) -> Value {
    json!({
        "livestock_id": livestock_id,
        "price": 1500.0,
        "payment_method": "cash",
        "date_of_sale": "2025-05-01",
        "deposit_amount": 500.0,
        "balance_due": 1000.0,
        "zip_code": "54000",
        "terms_and_conditions": "Balance due on delivery",
        "buyer_name": "Bilal Ahmed",
        "buyer_email": buyer_email,
        "buyer_phone_number": "03001234567",
        "buyer_city": "Lahore",
        "buyer_state": "Punjab",
        "buyer_zip_code": "54000",
        "buyer_designation": "Trader",
        "contact_name": "Sana Iqbal",
        "contact_phone_number": "03217654321",
        "contact_email": "sana@example.com",
        "contact_address": "12 Canal Road",
        "contact_role": "Broker"
    })
}

pub fn butcher_body(livestock_id: Uuid, internal_id: &str) -> Value {
    json!({
        "livestock_id": livestock_id,
        "name": "Bessie",
        "breed": "Holstein",
        "sex": "female",
        "internal_id": internal_id,
        "status": "processed",
        "date": "2025-06-10",
        "cause": "end of lactation"
    })
}
