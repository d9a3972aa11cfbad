pub mod create;
pub mod delete;
pub mod update;

pub use create::CreateButcherCommand;
pub use update::UpdateButcherCommand;
