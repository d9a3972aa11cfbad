//! Contacts: buyers, points of contact and other people the farm deals with

pub mod commands;
pub mod model;
pub mod queries;
pub mod routes;

pub use model::{Contact, CONTACT_SCHEMA};
pub use routes::contacts_routes;
