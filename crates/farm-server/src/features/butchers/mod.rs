//! Butcher records, at most one per animal

pub mod commands;
pub mod model;
pub mod queries;
pub mod routes;

pub use model::{Butcher, BUTCHER_SCHEMA};
pub use routes::butchers_routes;
