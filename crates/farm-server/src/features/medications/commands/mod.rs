pub mod create;
pub mod delete;
mod links;
pub mod update;

pub use create::CreateMedicationCommand;
pub use update::UpdateMedicationCommand;
