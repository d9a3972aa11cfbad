pub mod create;
pub mod delete;
pub mod update;

pub use create::CreateSellCommand;
pub use update::UpdateSellCommand;
