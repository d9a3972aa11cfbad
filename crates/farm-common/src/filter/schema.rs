//! Column registry
//!
//! Each entity registers the fields it exposes for filtering as a static
//! [`ColumnSet`]. The registry replaces live schema introspection: it is built
//! at compile time and never mutated.

use serde::Serialize;

/// Expected scalar type of a filterable column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    Text,
    Uuid,
    Integer,
    Decimal,
    Boolean,
    Date,
    Timestamp,
}

/// A filterable column. `name` is both the API field name and the SQL column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpec {
    pub name: &'static str,
    pub kind: ColumnKind,
}

impl ColumnSpec {
    pub const fn new(name: &'static str, kind: ColumnKind) -> Self {
        Self { name, kind }
    }
}

/// The set of fields an entity exposes for filtering
#[derive(Debug, Clone, Copy)]
pub struct ColumnSet {
    columns: &'static [ColumnSpec],
}

impl ColumnSet {
    pub const fn new(columns: &'static [ColumnSpec]) -> Self {
        Self { columns }
    }

    /// Look up a column by field name
    pub fn get(&self, name: &str) -> Option<&'static ColumnSpec> {
        self.columns.iter().find(|column| column.name == name)
    }

    /// Field names in registration order
    pub fn names(&self) -> Vec<&'static str> {
        self.columns.iter().map(|column| column.name).collect()
    }
}

/// Static registration of a listable entity: its table, the alias used in
/// generated SQL and its filterable columns.
#[derive(Debug, Clone, Copy)]
pub struct EntitySchema {
    pub table: &'static str,
    pub alias: &'static str,
    pub columns: ColumnSet,
}

impl EntitySchema {
    pub const fn new(table: &'static str, alias: &'static str, columns: ColumnSet) -> Self {
        Self {
            table,
            alias,
            columns,
        }
    }

    /// `alias.column`, for columns that are known to exist
    pub fn qualify(&self, column: &str) -> String {
        format!("{}.{}", self.alias, column)
    }
}
