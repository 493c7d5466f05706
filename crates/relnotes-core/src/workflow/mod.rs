//! Workflow operations shared by the CLI

mod changelog;

pub use changelog::*;
