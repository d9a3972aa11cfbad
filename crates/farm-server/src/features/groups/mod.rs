//! Livestock groups (herds, pens, paddock cohorts)

pub mod commands;
pub mod model;
pub mod queries;
pub mod routes;

pub use model::{Group, GROUP_SCHEMA};
pub use routes::groups_routes;
