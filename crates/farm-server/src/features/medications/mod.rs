//! Medication records and the livestock they were given to

pub mod commands;
pub mod model;
pub mod queries;
pub mod routes;

pub use model::{Medication, MEDICATION_SCHEMA};
pub use routes::medications_routes;
