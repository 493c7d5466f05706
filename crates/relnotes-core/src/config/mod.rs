//! Configuration system for relnotes

pub mod defaults;
mod env;
mod loader;
mod types;
pub mod validation;

pub use defaults::*;
pub use env::{ENV_KIND, ENV_REPOSITORY, ENV_TITLE};
pub use loader::*;
pub use types::*;
pub use validation::*;
