//! Filter descriptors and query-string parsing

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::FilterError;

/// A client-supplied `{field, operator, value}` triple.
///
/// Every member is optional at this stage so that an incomplete descriptor
/// can be reported as [`FilterError::MalformedFilter`] rather than failing
/// deserialization of the whole list. A JSON `null` value counts as absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterDescriptor {
    #[serde(default)]
    pub field: Option<String>,
    #[serde(default)]
    pub operator: Option<String>,
    #[serde(default)]
    pub value: Option<Value>,
}

impl FilterDescriptor {
    pub fn new(field: impl Into<String>, operator: impl Into<String>, value: Value) -> Self {
        Self {
            field: Some(field.into()),
            operator: Some(operator.into()),
            value: Some(value),
        }
    }
}

/// Parse the `filters` query parameter.
///
/// - absent or blank input yields no filters
/// - text that is not JSON is logged and treated as no filters
/// - JSON that is not an array, or an element that is not a descriptor
///   object, is a [`FilterError::MalformedFilter`]
pub fn parse_filters(raw: Option<&str>) -> Result<Vec<FilterDescriptor>, FilterError> {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(Vec::new());
    };

    let parsed: Value = match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(error = %e, filters = %raw, "Ignoring filters that are not valid JSON");
            return Ok(Vec::new());
        },
    };

    let Value::Array(items) = parsed else {
        return Err(FilterError::malformed(0, "filters must be a JSON array"));
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            if !item.is_object() {
                return Err(FilterError::malformed(
                    index,
                    "each filter must be an object with field, operator and value",
                ));
            }
            serde_json::from_value::<FilterDescriptor>(item)
                .map_err(|e| FilterError::malformed(index, e.to_string()))
        })
        .collect()
}
