pub mod create;
pub mod delete;
pub mod update;

pub use create::CreateBreedCommand;
pub use update::UpdateBreedCommand;
