pub mod create;
pub mod delete;
pub mod update;

pub use create::CreateGroupCommand;
pub use update::UpdateGroupCommand;
