//! Sale records. Creating a sale also records the buyer and point of contact.

pub mod commands;
pub mod model;
pub mod queries;
pub mod routes;

pub use model::{Sell, SELL_SCHEMA};
pub use routes::sells_routes;
