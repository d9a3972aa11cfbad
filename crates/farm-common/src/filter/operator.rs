//! Operator resolver
//!
//! Maps the symbolic operator names accepted in filter descriptors onto SQL
//! comparison fragments. The table is fixed for the lifetime of the process.

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use super::error::FilterError;

/// A supported filter operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FilterOperator {
    #[serde(rename = "eq")]
    Eq,
    #[serde(rename = "neq")]
    Neq,
    #[serde(rename = "gt")]
    Gt,
    #[serde(rename = "lt")]
    Lt,
    #[serde(rename = "gte")]
    Gte,
    #[serde(rename = "lte")]
    Lte,
    #[serde(rename = "like")]
    Like,
    #[serde(rename = "in")]
    In,
    #[serde(rename = "notIn")]
    NotIn,
    #[serde(rename = "between")]
    Between,
}

/// `(name, operator, fragment)` for every supported operator, in display order.
const OPERATOR_TABLE: [(&str, FilterOperator, &str); 10] = [
    ("eq", FilterOperator::Eq, "="),
    ("neq", FilterOperator::Neq, "!="),
    ("gt", FilterOperator::Gt, ">"),
    ("lt", FilterOperator::Lt, "<"),
    ("gte", FilterOperator::Gte, ">="),
    ("lte", FilterOperator::Lte, "<="),
    ("like", FilterOperator::Like, "ILIKE"),
    ("in", FilterOperator::In, "IN"),
    ("notIn", FilterOperator::NotIn, "NOT IN"),
    ("between", FilterOperator::Between, "BETWEEN"),
];

impl FilterOperator {
    /// Every operator, in the order they are documented.
    pub const ALL: [FilterOperator; 10] = [
        FilterOperator::Eq,
        FilterOperator::Neq,
        FilterOperator::Gt,
        FilterOperator::Lt,
        FilterOperator::Gte,
        FilterOperator::Lte,
        FilterOperator::Like,
        FilterOperator::In,
        FilterOperator::NotIn,
        FilterOperator::Between,
    ];

    fn entry(self) -> (&'static str, FilterOperator, &'static str) {
        OPERATOR_TABLE[self as usize]
    }

    /// Name used in filter descriptors (`notIn`, `gte`, ...)
    pub fn name(self) -> &'static str {
        self.entry().0
    }

    /// SQL comparison fragment
    pub fn sql_fragment(self) -> &'static str {
        self.entry().2
    }

    /// All accepted operator names
    pub fn names() -> Vec<&'static str> {
        OPERATOR_TABLE.iter().map(|(name, _, _)| *name).collect()
    }
}

impl FromStr for FilterOperator {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OPERATOR_TABLE
            .iter()
            .find(|(name, _, _)| *name == s)
            .map(|(_, operator, _)| *operator)
            .ok_or_else(|| FilterError::InvalidOperator {
                operator: s.to_string(),
            })
    }
}

impl fmt::Display for FilterOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Resolve an operator name to its SQL fragment.
///
/// Fails with [`FilterError::InvalidOperator`] for an empty or unknown name.
/// Names are case-sensitive.
pub fn resolve(operator: &str) -> Result<&'static str, FilterError> {
    operator.parse::<FilterOperator>().map(FilterOperator::sql_fragment)
}
