//! Render a validated [`Predicate`] into a SQL query builder
//!
//! Column names and operator fragments come from the predicate, which only
//! ever holds registered identifiers. Every value goes through `push_bind`.

use farm_common::filter::{Condition, Predicate, SqlValue};
use sqlx::{Postgres, QueryBuilder};

/// Append ` WHERE c1 AND c2 ...` for a non-empty predicate.
pub fn apply_filters(builder: &mut QueryBuilder<'_, Postgres>, predicate: &Predicate) {
    for (i, condition) in predicate.conditions().iter().enumerate() {
        builder.push(if i == 0 { " WHERE " } else { " AND " });
        push_condition(builder, condition);
    }
}

fn push_condition(builder: &mut QueryBuilder<'_, Postgres>, condition: &Condition) {
    match condition {
        Condition::Compare {
            column,
            operator,
            param,
        } => {
            builder
                .push(column)
                .push(" ")
                .push(operator.sql_fragment())
                .push(" ");
            bind(builder, &param.value);
        },
        Condition::Like { column, param } => {
            builder.push("CAST(").push(column).push(" AS TEXT) ILIKE ");
            bind(builder, &param.value);
        },
        Condition::Membership {
            column,
            operator,
            list,
        } => {
            builder
                .push(column)
                .push(" ")
                .push(operator.sql_fragment())
                .push(" (");
            for (i, value) in list.values.iter().enumerate() {
                if i > 0 {
                    builder.push(", ");
                }
                bind(builder, value);
            }
            builder.push(")");
        },
        Condition::Between { column, start, end } => {
            builder.push(column).push(" BETWEEN ");
            bind(builder, &start.value);
            builder.push(" AND ");
            bind(builder, &end.value);
        },
    }
}

fn bind(builder: &mut QueryBuilder<'_, Postgres>, value: &SqlValue) {
    match value.clone() {
        SqlValue::Text(v) => builder.push_bind(v),
        SqlValue::Uuid(v) => builder.push_bind(v),
        SqlValue::Integer(v) => builder.push_bind(v),
        SqlValue::Decimal(v) => builder.push_bind(v),
        SqlValue::Boolean(v) => builder.push_bind(v),
        SqlValue::Date(v) => builder.push_bind(v),
        SqlValue::Timestamp(v) => builder.push_bind(v),
    };
}
