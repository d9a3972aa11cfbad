//! Breeding records

pub mod commands;
pub mod model;
pub mod queries;
pub mod routes;

pub use model::{Breed, BREED_SCHEMA};
pub use routes::breeds_routes;
