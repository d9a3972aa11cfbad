//! Database error handling utilities
//!
//! Turns constraint violations reported by PostgreSQL into domain errors so
//! they surface as 404/409 instead of 500.
//!
//! # Examples
//!
//! ```rust,ignore
//! use farm_server::features::shared::error_helpers::map_unique_violation;
//!
//! sqlx::query("INSERT INTO groups ...")
//!     .execute(&pool)
//!     .await
//!     .map_err(|e| map_unique_violation(e, "Group ID number already exists"))?;
//! ```

use sqlx::Error as SqlxError;

use crate::error::AppError;

fn is_unique_violation(error: &SqlxError) -> bool {
    if let SqlxError::Database(db_err) = error {
        return db_err.is_unique_violation();
    }
    false
}

fn is_foreign_key_violation(error: &SqlxError) -> bool {
    if let SqlxError::Database(db_err) = error {
        return db_err.is_foreign_key_violation();
    }
    false
}

/// Map a unique violation to `Conflict(message)`; anything else stays a
/// database error.
pub fn map_unique_violation(error: SqlxError, message: &str) -> AppError {
    if is_unique_violation(&error) {
        AppError::Conflict(message.to_string())
    } else {
        AppError::Database(error)
    }
}

/// Map a foreign key violation to `Conflict(message)`. Used by deletes of
/// rows that are still referenced.
pub fn map_foreign_key_violation(error: SqlxError, message: &str) -> AppError {
    if is_foreign_key_violation(&error) {
        AppError::Conflict(message.to_string())
    } else {
        AppError::Database(error)
    }
}
