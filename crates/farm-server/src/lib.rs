//! Farm Records Server Library
//!
//! REST backend for farm record keeping: livestock, breeding, feeding,
//! sales, butchering, contacts, groups and medication.
//!
//! # Architecture
//!
//! Each resource is a vertical slice under [`features`]:
//!
//! - `commands/` - write operations (create, update, delete)
//! - `queries/` - read operations (get, list)
//! - `model.rs` - the row type and the filterable column registry
//! - `routes.rs` - axum handlers mounted under `/api/v1/<resource>`
//!
//! Listing goes through a shared engine that validates the client's
//! `filters`, `page` and `limit` before any SQL is built, renders the
//! resulting predicate with bound parameters and returns the `{message,
//! data, meta}` envelope.
//!
//! Multi-step writes (feeds and medications linking livestock, sales
//! creating contacts, butcher records) run inside a
//! [`db::ScopedTransaction`].
//!
//! ## Framework Stack
//!
//! - **Axum**: HTTP routing and extraction
//! - **SQLx**: PostgreSQL access with runtime-checked queries
//! - **Tower**: middleware (CORS, tracing, compression)
//!
//! # Example
//!
//! ```no_run
//! use farm_server::{api, config::Config, db};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load()?;
//!     let pool = db::create_pool(&config.database).await?;
//!     api::serve(pool, config).await
//! }
//! ```

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod features;
pub mod middleware;

// Re-export commonly used types
pub use error::{AppError, AppResult};
