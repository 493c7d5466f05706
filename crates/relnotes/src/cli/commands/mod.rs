//! CLI commands

mod categories;
mod generate;
mod init;

pub use categories::CategoriesCommand;
pub use generate::GenerateCommand;
pub use init::InitCommand;
