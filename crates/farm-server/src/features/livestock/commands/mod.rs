pub mod create;
pub mod delete;
pub mod update;

pub use create::CreateLivestockCommand;
pub use update::UpdateLivestockCommand;
