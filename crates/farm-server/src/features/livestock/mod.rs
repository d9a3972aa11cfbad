//! Livestock: the animals every other record refers to

pub mod commands;
pub mod model;
pub mod queries;
pub mod routes;

pub use model::{Livestock, LIVESTOCK_SCHEMA};
pub use routes::livestock_routes;
