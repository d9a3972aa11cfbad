//! Filter values
//!
//! A descriptor's `value` arrives as untyped JSON. [`FilterValue`] gives it the
//! shape its operator requires, and [`SqlValue`] gives each scalar the type of
//! the column it is compared against.

use chrono::{DateTime, NaiveDate, Utc};
use serde_json::Value;
use std::fmt;
use uuid::Uuid;

use super::{error::FilterError, operator::FilterOperator, schema::ColumnKind};

/// Shape of a filter value, selected by the operator
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    /// `eq`, `neq`, `gt`, `lt`, `gte`, `lte`, `like`
    Scalar(Value),
    /// `in`, `notIn`; never empty
    List(Vec<Value>),
    /// `between`; inclusive start and end
    Range(Value, Value),
}

impl FilterValue {
    /// Check that `raw` has the shape `operator` requires.
    pub fn for_operator(
        field: &str,
        operator: FilterOperator,
        raw: &Value,
    ) -> Result<Self, FilterError> {
        match operator {
            FilterOperator::In | FilterOperator::NotIn => {
                let items = raw.as_array().ok_or_else(|| {
                    FilterError::invalid_value(field, operator, "expected a non-empty array")
                })?;
                if items.is_empty() {
                    return Err(FilterError::invalid_value(
                        field,
                        operator,
                        "expected a non-empty array",
                    ));
                }
                for item in items {
                    ensure_scalar(field, operator, item)?;
                }
                Ok(FilterValue::List(items.clone()))
            },
            FilterOperator::Between => {
                let bounds = raw
                    .as_array()
                    .filter(|items| items.len() == 2)
                    .ok_or_else(|| {
                        FilterError::invalid_value(
                            field,
                            operator,
                            "expected an array of exactly two values",
                        )
                    })?;
                for bound in bounds {
                    ensure_scalar(field, operator, bound)?;
                }
                Ok(FilterValue::Range(bounds[0].clone(), bounds[1].clone()))
            },
            _ => {
                ensure_scalar(field, operator, raw)?;
                Ok(FilterValue::Scalar(raw.clone()))
            },
        }
    }
}

fn ensure_scalar(field: &str, operator: FilterOperator, value: &Value) -> Result<(), FilterError> {
    match value {
        Value::Null => Err(FilterError::invalid_value(field, operator, "values must not be null")),
        Value::Array(_) | Value::Object(_) => Err(FilterError::invalid_value(
            field,
            operator,
            "expected a string, number or boolean",
        )),
        _ => Ok(()),
    }
}

/// A scalar converted to the type of the column it is bound against
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Text(String),
    Uuid(Uuid),
    Integer(i64),
    Decimal(f64),
    Boolean(bool),
    Date(NaiveDate),
    Timestamp(DateTime<Utc>),
}

impl SqlValue {
    /// Convert a JSON scalar to the given column kind.
    ///
    /// The error string describes what was expected; the caller attaches the
    /// field and operator.
    pub fn coerce(kind: ColumnKind, value: &Value) -> Result<Self, String> {
        match kind {
            ColumnKind::Text => Ok(SqlValue::Text(text_of(value))),
            ColumnKind::Uuid => value
                .as_str()
                .and_then(|s| Uuid::parse_str(s.trim()).ok())
                .map(SqlValue::Uuid)
                .ok_or_else(|| format!("expected a UUID, got {}", value)),
            ColumnKind::Integer => integer_of(value)
                .map(SqlValue::Integer)
                .ok_or_else(|| format!("expected an integer, got {}", value)),
            ColumnKind::Decimal => decimal_of(value)
                .map(SqlValue::Decimal)
                .ok_or_else(|| format!("expected a number, got {}", value)),
            ColumnKind::Boolean => boolean_of(value)
                .map(SqlValue::Boolean)
                .ok_or_else(|| format!("expected a boolean, got {}", value)),
            ColumnKind::Date => value
                .as_str()
                .and_then(date_of)
                .map(SqlValue::Date)
                .ok_or_else(|| format!("expected a date (YYYY-MM-DD), got {}", value)),
            ColumnKind::Timestamp => value
                .as_str()
                .and_then(timestamp_of)
                .map(SqlValue::Timestamp)
                .ok_or_else(|| format!("expected an RFC 3339 timestamp, got {}", value)),
        }
    }

    /// Text rendering used for `like` patterns
    pub fn as_text(value: &Value) -> String {
        text_of(value)
    }
}

impl fmt::Display for SqlValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SqlValue::Text(v) => write!(f, "'{}'", v),
            SqlValue::Uuid(v) => write!(f, "'{}'", v),
            SqlValue::Integer(v) => write!(f, "{}", v),
            SqlValue::Decimal(v) => write!(f, "{}", v),
            SqlValue::Boolean(v) => write!(f, "{}", v),
            SqlValue::Date(v) => write!(f, "'{}'", v),
            SqlValue::Timestamp(v) => write!(f, "'{}'", v.to_rfc3339()),
        }
    }
}

fn text_of(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn integer_of(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn decimal_of(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
        _ => None,
    }
}

fn boolean_of(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::String(s) => match s.trim() {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

fn date_of(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.date_naive()))
}

fn timestamp_of(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
        .or_else(|| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
                .map(|naive| naive.and_utc())
        })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scalar_shape() {
        let value = FilterValue::for_operator("weight", FilterOperator::Gte, &json!(50)).unwrap();
        assert_eq!(value, FilterValue::Scalar(json!(50)));

        // zero and false are legitimate values
        assert!(FilterValue::for_operator("weight", FilterOperator::Eq, &json!(0)).is_ok());
        assert!(FilterValue::for_operator("neutered", FilterOperator::Eq, &json!(false)).is_ok());

        let err = FilterValue::for_operator("weight", FilterOperator::Eq, &json!([1, 2]))
            .unwrap_err();
        assert_eq!(err.code(), "INVALID_OPERATOR_VALUE");
    }

    #[test]
    fn test_list_shape() {
        let value =
            FilterValue::for_operator("status", FilterOperator::In, &json!(["A", "B"])).unwrap();
        assert_eq!(value, FilterValue::List(vec![json!("A"), json!("B")]));

        for bad in [json!([]), json!("A"), json!([null]), json!([["A"]])] {
            let err = FilterValue::for_operator("status", FilterOperator::NotIn, &bad).unwrap_err();
            assert!(
                matches!(err, FilterError::InvalidOperatorValue { ref operator, .. } if operator == "notIn"),
                "{:?} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_range_shape() {
        let value =
            FilterValue::for_operator("weight", FilterOperator::Between, &json!([10, 20])).unwrap();
        assert_eq!(value, FilterValue::Range(json!(10), json!(20)));

        for bad in [json!([]), json!([1]), json!([1, 2, 3]), json!([1, null]), json!(5)] {
            assert!(
                FilterValue::for_operator("weight", FilterOperator::Between, &bad).is_err(),
                "{:?} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_coerce_text_accepts_any_scalar() {
        assert_eq!(
            SqlValue::coerce(ColumnKind::Text, &json!("cow")).unwrap(),
            SqlValue::Text("cow".to_string())
        );
        assert_eq!(
            SqlValue::coerce(ColumnKind::Text, &json!(42)).unwrap(),
            SqlValue::Text("42".to_string())
        );
    }

    #[test]
    fn test_coerce_numbers() {
        assert_eq!(
            SqlValue::coerce(ColumnKind::Integer, &json!(3)).unwrap(),
            SqlValue::Integer(3)
        );
        assert_eq!(
            SqlValue::coerce(ColumnKind::Integer, &json!("7")).unwrap(),
            SqlValue::Integer(7)
        );
        assert!(SqlValue::coerce(ColumnKind::Integer, &json!(2.5)).is_err());
        assert_eq!(
            SqlValue::coerce(ColumnKind::Decimal, &json!(50)).unwrap(),
            SqlValue::Decimal(50.0)
        );
        assert_eq!(
            SqlValue::coerce(ColumnKind::Decimal, &json!("12.5")).unwrap(),
            SqlValue::Decimal(12.5)
        );
        assert!(SqlValue::coerce(ColumnKind::Decimal, &json!("heavy")).is_err());
    }

    #[test]
    fn test_coerce_uuid_and_boolean() {
        let id = Uuid::new_v4();
        assert_eq!(
            SqlValue::coerce(ColumnKind::Uuid, &json!(id.to_string())).unwrap(),
            SqlValue::Uuid(id)
        );
        assert!(SqlValue::coerce(ColumnKind::Uuid, &json!("not-a-uuid")).is_err());
        assert_eq!(
            SqlValue::coerce(ColumnKind::Boolean, &json!("true")).unwrap(),
            SqlValue::Boolean(true)
        );
        assert!(SqlValue::coerce(ColumnKind::Boolean, &json!(1)).is_err());
    }

    #[test]
    fn test_coerce_dates() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        assert_eq!(
            SqlValue::coerce(ColumnKind::Date, &json!("2024-03-01")).unwrap(),
            SqlValue::Date(expected)
        );
        assert_eq!(
            SqlValue::coerce(ColumnKind::Date, &json!("2024-03-01T10:00:00Z")).unwrap(),
            SqlValue::Date(expected)
        );
        assert!(SqlValue::coerce(ColumnKind::Date, &json!("01/03/2024")).is_err());

        let midnight = SqlValue::coerce(ColumnKind::Timestamp, &json!("2024-03-01")).unwrap();
        assert_eq!(
            midnight,
            SqlValue::Timestamp(expected.and_hms_opt(0, 0, 0).unwrap().and_utc())
        );
    }
}
