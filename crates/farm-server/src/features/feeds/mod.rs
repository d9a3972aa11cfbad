//! Feed records and the livestock they are given to

pub mod commands;
pub mod model;
pub mod queries;
pub mod routes;

pub use model::{Feed, FEED_SCHEMA};
pub use routes::feeds_routes;
