//! Filter applier
//!
//! Folds an ordered list of descriptors into a flat conjunction of typed,
//! parameterized conditions.

use std::fmt;

use super::{
    descriptor::FilterDescriptor,
    error::FilterError,
    operator::FilterOperator,
    schema::{ColumnSet, ColumnSpec},
    value::{FilterValue, SqlValue},
};

/// A named, typed bind parameter
#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    pub name: String,
    pub value: SqlValue,
}

/// A named collection parameter; rendered as one placeholder per element.
#[derive(Debug, Clone, PartialEq)]
pub struct ParamList {
    pub name: String,
    pub values: Vec<SqlValue>,
}

/// One condition of the conjunction. `column` is always `alias.name` built
/// from registered identifiers.
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    /// `column <op> param` for `eq`, `neq`, `gt`, `lt`, `gte`, `lte`
    Compare {
        column: String,
        operator: FilterOperator,
        param: Param,
    },
    /// `CAST(column AS TEXT) ILIKE param`, where the param is `%text%`
    Like { column: String, param: Param },
    /// `column IN (...)` / `column NOT IN (...)`
    Membership {
        column: String,
        operator: FilterOperator,
        list: ParamList,
    },
    /// `column BETWEEN start AND end`, inclusive
    Between {
        column: String,
        start: Param,
        end: Param,
    },
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Condition::Compare {
                column,
                operator,
                param,
            } => write!(f, "{} {} :{}", column, operator.sql_fragment(), param.name),
            Condition::Like { column, param } => {
                write!(f, "CAST({} AS TEXT) ILIKE :{}", column, param.name)
            },
            Condition::Membership {
                column,
                operator,
                list,
            } => write!(f, "{} {} (:...{})", column, operator.sql_fragment(), list.name),
            Condition::Between { column, start, end } => {
                write!(f, "{} BETWEEN :{} AND :{}", column, start.name, end.name)
            },
        }
    }
}

/// An ordered conjunction of conditions
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Predicate {
    conditions: Vec<Condition>,
}

impl Predicate {
    /// Validate `filters` against `columns` and build the conjunction.
    ///
    /// Descriptors are processed in order and the first failure aborts the
    /// build. For each descriptor the checks run as: structure, field,
    /// operator, then value shape and type.
    pub fn build(
        filters: &[FilterDescriptor],
        columns: &ColumnSet,
        alias: &str,
    ) -> Result<Self, FilterError> {
        let conditions = filters
            .iter()
            .enumerate()
            .map(|(index, descriptor)| build_condition(index, descriptor, columns, alias))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { conditions })
    }

    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.conditions.len()
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, condition) in self.conditions.iter().enumerate() {
            if i > 0 {
                f.write_str(" AND ")?;
            }
            write!(f, "{}", condition)?;
        }
        Ok(())
    }
}

fn build_condition(
    index: usize,
    descriptor: &FilterDescriptor,
    columns: &ColumnSet,
    alias: &str,
) -> Result<Condition, FilterError> {
    let field = required(index, descriptor.field.as_deref(), "field")?;
    let operator_name = required(index, descriptor.operator.as_deref(), "operator")?;
    let raw = descriptor
        .value
        .as_ref()
        .ok_or_else(|| FilterError::malformed(index, "value is required"))?;

    let spec = columns.get(field).ok_or_else(|| FilterError::UnknownField {
        field: field.to_string(),
        allowed: columns.names().into_iter().map(String::from).collect(),
    })?;

    let operator: FilterOperator = operator_name.parse()?;
    let column = format!("{}.{}", alias, spec.name);

    let condition = match FilterValue::for_operator(spec.name, operator, raw)? {
        FilterValue::Scalar(value) if operator == FilterOperator::Like => Condition::Like {
            column,
            param: Param {
                name: param_name(spec, index),
                value: SqlValue::Text(format!("%{}%", SqlValue::as_text(&value))),
            },
        },
        FilterValue::Scalar(value) => Condition::Compare {
            column,
            operator,
            param: Param {
                name: param_name(spec, index),
                value: typed(spec, operator, &value)?,
            },
        },
        FilterValue::List(values) => Condition::Membership {
            column,
            operator,
            list: ParamList {
                name: param_name(spec, index),
                values: values
                    .iter()
                    .map(|value| typed(spec, operator, value))
                    .collect::<Result<Vec<_>, FilterError>>()?,
            },
        },
        FilterValue::Range(start, end) => Condition::Between {
            column,
            start: Param {
                name: format!("{}_start_{}", spec.name, index),
                value: typed(spec, operator, &start)?,
            },
            end: Param {
                name: format!("{}_end_{}", spec.name, index),
                value: typed(spec, operator, &end)?,
            },
        },
    };

    Ok(condition)
}

fn required<'a>(index: usize, member: Option<&'a str>, name: &str) -> Result<&'a str, FilterError> {
    member
        .filter(|s| !s.trim().is_empty())
        .ok_or_else(|| FilterError::malformed(index, format!("{} is required", name)))
}

fn param_name(spec: &ColumnSpec, index: usize) -> String {
    format!("{}_{}", spec.name, index)
}

fn typed(
    spec: &ColumnSpec,
    operator: FilterOperator,
    value: &serde_json::Value,
) -> Result<SqlValue, FilterError> {
    SqlValue::coerce(spec.kind, value)
        .map_err(|reason| FilterError::invalid_value(spec.name, operator, reason))
}
