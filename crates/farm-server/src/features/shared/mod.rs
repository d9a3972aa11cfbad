//! Shared utilities and types for feature modules
//!
//! # Contents
//!
//! - **listing**: the filtered, ordered, optionally paginated list engine
//! - **embed**: related rows folded into reads as JSONB
//! - **filters**: renders a validated predicate into a `QueryBuilder`
//! - **pagination**: page window and response metadata
//! - **patch**: absent / `null` / value fields for partial updates
//! - **validation**: input validation utilities
//! - **error_helpers**: database constraint violation mapping
//! - **relations**: existence checks for referenced livestock
//! - **test_helpers**: router and schema test utilities (test-only)

pub mod embed;
pub mod error_helpers;
pub mod filters;
pub mod listing;
pub mod pagination;
pub mod patch;
pub mod relations;
pub mod validation;

#[cfg(test)]
pub mod test_helpers;

// Re-export commonly used types
pub use listing::{ListParams, Listing};
pub use pagination::{PageRequest, PaginationMeta};
pub use validation::ValidationError;
