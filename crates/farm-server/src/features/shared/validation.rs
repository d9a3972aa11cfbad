//! Shared validation utilities
//!
//! Request bodies are validated before any SQL runs. Each helper checks one
//! rule and names the offending field in its error.
//!
//! # Examples
//!
//! ```rust,ignore
//! use farm_server::features::shared::validation::{validate_text, validate_email};
//!
//! validate_text("full_name", &command.full_name, 1, 100)?;
//! validate_email(&command.email)?;
//! ```

use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

static EMAIL_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok());

/// Errors raised while validating request input
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    #[error("{field} is required and cannot be empty")]
    Required { field: &'static str },

    #[error("{field} must be between {min} and {max} characters")]
    Length {
        field: &'static str,
        min: usize,
        max: usize,
    },

    #[error("{field} must contain between {min} and {max} digits")]
    Digits {
        field: &'static str,
        min: usize,
        max: usize,
    },

    #[error("{field} must be a valid email address")]
    InvalidEmail { field: &'static str },

    #[error("{field} cannot be negative")]
    Negative { field: &'static str },

    #[error("{field} must be greater than 0")]
    NotPositive { field: &'static str },

    #[error("{field} must contain at least one ID")]
    EmptyIds { field: &'static str },

    #[error("No fields to update")]
    NoFieldsToUpdate,

    #[error("Page must be greater than 0")]
    InvalidPage,

    #[error("Page {page} is out of range for limit {limit}")]
    PageOutOfRange { page: i64, limit: i64 },

    #[error("Limit must be between 1 and {max}")]
    InvalidLimit { max: i64 },
}

/// Validate a required text field: non-blank and `min..=max` characters
pub fn validate_text(
    field: &'static str,
    value: &str,
    min: usize,
    max: usize,
) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required { field });
    }
    check_length(field, value, min, max)
}

/// Validate an optional text field. `None` always passes.
pub fn validate_optional_text(
    field: &'static str,
    value: Option<&str>,
    min: usize,
    max: usize,
) -> Result<(), ValidationError> {
    match value {
        Some(value) => check_length(field, value, min, max),
        None => Ok(()),
    }
}

fn check_length(
    field: &'static str,
    value: &str,
    min: usize,
    max: usize,
) -> Result<(), ValidationError> {
    let len = value.chars().count();
    if len < min || len > max {
        return Err(ValidationError::Length { field, min, max });
    }
    Ok(())
}

/// Validate an email address (5..=100 characters, `local@domain.tld`)
pub fn validate_email(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required { field });
    }
    check_length(field, value, 5, 100)?;

    let valid = EMAIL_PATTERN
        .as_ref()
        .is_some_and(|pattern| pattern.is_match(value));
    if !valid {
        return Err(ValidationError::InvalidEmail { field });
    }
    Ok(())
}

/// Validate a phone number made only of `min..=max` ASCII digits
pub fn validate_digits(
    field: &'static str,
    value: &str,
    min: usize,
    max: usize,
) -> Result<(), ValidationError> {
    let all_digits = !value.is_empty() && value.chars().all(|c| c.is_ascii_digit());
    if !all_digits || value.len() < min || value.len() > max {
        return Err(ValidationError::Digits { field, min, max });
    }
    Ok(())
}

pub fn validate_non_negative(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if value < 0.0 {
        return Err(ValidationError::Negative { field });
    }
    Ok(())
}

pub fn validate_positive(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if value <= 0.0 {
        return Err(ValidationError::NotPositive { field });
    }
    Ok(())
}

/// Validate a list of linked IDs is not empty
pub fn validate_ids<T>(field: &'static str, ids: &[T]) -> Result<(), ValidationError> {
    if ids.is_empty() {
        return Err(ValidationError::EmptyIds { field });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_text() {
        assert!(validate_text("name", "Bessie", 1, 100).is_ok());
        assert_eq!(
            validate_text("name", "   ", 1, 100),
            Err(ValidationError::Required { field: "name" })
        );
        assert_eq!(
            validate_text("name", &"a".repeat(101), 1, 100),
            Err(ValidationError::Length {
                field: "name",
                min: 1,
                max: 100
            })
        );
    }

    #[test]
    fn test_validate_text_counts_characters() {
        // Four characters, eight bytes
        assert!(validate_text("name", "ÄÖÜß", 1, 4).is_ok());
    }

    #[test]
    fn test_validate_optional_text() {
        assert!(validate_optional_text("cause", None, 1, 255).is_ok());
        assert!(validate_optional_text("cause", Some("illness"), 1, 255).is_ok());
        assert!(validate_optional_text("postal_code", Some("12"), 3, 20).is_err());
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("email", "farmer@example.com").is_ok());
        assert_eq!(
            validate_email("email", "not-an-email"),
            Err(ValidationError::InvalidEmail { field: "email" })
        );
        assert_eq!(
            validate_email("email", "a@b"),
            Err(ValidationError::Length {
                field: "email",
                min: 5,
                max: 100
            })
        );
        assert_eq!(
            validate_email("email", ""),
            Err(ValidationError::Required { field: "email" })
        );
    }

    #[test]
    fn test_validate_digits() {
        assert!(validate_digits("phone_number", "03001234567", 7, 20).is_ok());
        assert!(validate_digits("phone_number", "123456", 7, 20).is_err());
        assert!(validate_digits("phone_number", "+923001234567", 7, 20).is_err());
        assert!(validate_digits("phone_number", "", 7, 20).is_err());
    }

    #[test]
    fn test_numeric_bounds() {
        assert!(validate_non_negative("cost", 0.0).is_ok());
        assert!(validate_non_negative("cost", -0.5).is_err());
        assert!(validate_positive("breeding_cost", 0.01).is_ok());
        assert_eq!(
            validate_positive("breeding_cost", 0.0),
            Err(ValidationError::NotPositive {
                field: "breeding_cost"
            })
        );
    }

    #[test]
    fn test_validate_ids() {
        assert!(validate_ids::<u8>("livestock_ids", &[]).is_err());
        assert!(validate_ids("livestock_ids", &[1]).is_ok());
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            ValidationError::InvalidLimit { max: 100 }.to_string(),
            "Limit must be between 1 and 100"
        );
        assert_eq!(ValidationError::NoFieldsToUpdate.to_string(), "No fields to update");
    }
}
