//! Farm Records Common Library
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Shared building blocks for the farm records workspace.
//!
//! # Overview
//!
//! - **Logging**: tracing subscriber setup shared by every binary
//! - **Filtering**: the operator resolver and filter applier that turn
//!   client-supplied `{field, operator, value}` descriptors into a typed,
//!   parameterized predicate
//!
//! Nothing in this crate performs I/O against the database. The server
//! renders a [`filter::Predicate`] into its query builder and executes it.
//!
//! # Example
//!
//! ```
//! use farm_common::filter::{parse_filters, ColumnKind, ColumnSet, ColumnSpec, Predicate};
//!
//! const FIELDS: &[ColumnSpec] = &[
//!     ColumnSpec::new("status", ColumnKind::Text),
//!     ColumnSpec::new("weight", ColumnKind::Decimal),
//! ];
//! const COLUMNS: ColumnSet = ColumnSet::new(FIELDS);
//!
//! let filters = parse_filters(Some(
//!     r#"[{"field":"status","operator":"eq","value":"ACTIVE"},
//!         {"field":"weight","operator":"gte","value":50}]"#,
//! ))
//! .unwrap();
//!
//! let predicate = Predicate::build(&filters, &COLUMNS, "livestock").unwrap();
//! assert_eq!(
//!     predicate.to_string(),
//!     "livestock.status = :status_0 AND livestock.weight >= :weight_1"
//! );
//! ```

pub mod filter;
pub mod logging;

// Re-export commonly used types
pub use filter::{FilterError, FilterOperator, Predicate};
