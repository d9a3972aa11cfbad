//! Dynamic list filtering
//!
//! Clients constrain listings with a JSON array of filter descriptors:
//!
//! ```json
//! [
//!   { "field": "status", "operator": "eq",      "value": "ACTIVE" },
//!   { "field": "weight", "operator": "between", "value": [50, 80] }
//! ]
//! ```
//!
//! Processing happens in two stages:
//!
//! 1. [`parse_filters`] decodes the raw query-string value into
//!    [`FilterDescriptor`]s. Text that is not JSON at all is logged and
//!    ignored; JSON of the wrong shape is rejected.
//! 2. [`Predicate::build`] validates each descriptor against an entity's
//!    [`ColumnSet`], resolves its operator through [`resolve`], coerces the
//!    value into a typed [`SqlValue`] and appends one [`Condition`] to a flat
//!    AND conjunction.
//!
//! Column names and operator fragments only ever come from the static
//! whitelists in this module. User-supplied values only ever travel as bound
//! parameters.

mod descriptor;
mod error;
mod operator;
mod predicate;
mod schema;
mod value;

pub use descriptor::{parse_filters, FilterDescriptor};
pub use error::FilterError;
pub use operator::{resolve, FilterOperator};
pub use predicate::{Condition, Param, ParamList, Predicate};
pub use schema::{ColumnKind, ColumnSet, ColumnSpec, EntitySchema};
pub use value::{FilterValue, SqlValue};
