//! Filter validation errors

use serde_json::{json, Value};
use thiserror::Error;

use super::operator::FilterOperator;

/// Errors raised while parsing or applying filter descriptors.
///
/// All variants are client errors; nothing here is produced by the database.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FilterError {
    /// A descriptor is missing `field`, `operator` or `value`, or is not an object.
    #[error("Invalid filter format at position {index}: {reason}")]
    MalformedFilter { index: usize, reason: String },

    /// The descriptor names a column the entity does not expose.
    #[error("Invalid field: {field}. Allowed fields: {}", .allowed.join(", "))]
    UnknownField { field: String, allowed: Vec<String> },

    /// The operator is not one of the supported names.
    #[error("Invalid operator: {operator}. Available operators: {}", FilterOperator::names().join(", "))]
    InvalidOperator { operator: String },

    /// The value does not have the shape or type the operator and column require.
    #[error("Invalid value for operator '{operator}' on field '{field}': {reason}")]
    InvalidOperatorValue {
        field: String,
        operator: String,
        reason: String,
    },
}

impl FilterError {
    pub(crate) fn malformed(index: usize, reason: impl Into<String>) -> Self {
        Self::MalformedFilter {
            index,
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_value(
        field: &str,
        operator: FilterOperator,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidOperatorValue {
            field: field.to_string(),
            operator: operator.name().to_string(),
            reason: reason.into(),
        }
    }

    /// Stable machine-readable code for API responses
    pub fn code(&self) -> &'static str {
        match self {
            FilterError::MalformedFilter { .. } => "MALFORMED_FILTER",
            FilterError::UnknownField { .. } => "UNKNOWN_FIELD",
            FilterError::InvalidOperator { .. } => "INVALID_OPERATOR",
            FilterError::InvalidOperatorValue { .. } => "INVALID_OPERATOR_VALUE",
        }
    }

    /// Structured detail for API responses, listing the accepted alternatives
    /// where there are any.
    pub fn details(&self) -> Option<Value> {
        match self {
            FilterError::MalformedFilter { index, .. } => Some(json!({ "index": index })),
            FilterError::UnknownField { field, allowed } => Some(json!({
                "field": field,
                "allowed_fields": allowed,
            })),
            FilterError::InvalidOperator { operator } => Some(json!({
                "operator": operator,
                "available_operators": FilterOperator::names(),
            })),
            FilterError::InvalidOperatorValue { field, operator, .. } => Some(json!({
                "field": field,
                "operator": operator,
            })),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_operator_message_lists_every_operator() {
        let err = FilterError::InvalidOperator {
            operator: "contains".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid operator: contains. Available operators: \
             eq, neq, gt, lt, gte, lte, like, in, notIn, between"
        );
        assert_eq!(err.code(), "INVALID_OPERATOR");
    }

    #[test]
    fn test_unknown_field_message_lists_allowed_fields() {
        let err = FilterError::UnknownField {
            field: "colour".to_string(),
            allowed: vec!["name".to_string(), "status".to_string()],
        };
        assert_eq!(err.to_string(), "Invalid field: colour. Allowed fields: name, status");

        let details = err.details().unwrap();
        assert_eq!(details["allowed_fields"], json!(["name", "status"]));
    }

    #[test]
    fn test_codes() {
        assert_eq!(FilterError::malformed(0, "x").code(), "MALFORMED_FILTER");
        assert_eq!(
            FilterError::invalid_value("weight", FilterOperator::In, "empty").code(),
            "INVALID_OPERATOR_VALUE"
        );
    }
}
