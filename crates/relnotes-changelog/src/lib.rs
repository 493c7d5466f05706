//! relnotes changelog - commit classification and changelog rendering
//!
//! Commits are filed into the fixed Conventional Commit category table and
//! rendered as Markdown, one section per non-empty category.

pub mod category;
pub mod changelog;
pub mod classifier;
pub mod formatter;
pub mod generator;
pub mod store;
pub mod types;

pub use category::{Category, CONVENTIONAL_CATEGORIES, OTHERS};
pub use changelog::Changelog;
pub use classifier::{CommitClassifier, ConventionalClassifier, StandardClassifier};
pub use formatter::{ChangelogFormatter, MarkdownFormatter};
pub use generator::ChangelogGenerator;
pub use store::{ChangelogStore, Section};
pub use types::{ClassifiedEntry, CommitRecord};
