pub mod create;
pub mod delete;
mod links;
pub mod update;

pub use create::CreateFeedCommand;
pub use update::UpdateFeedCommand;
