//! relnotes git - commit source for changelog generation
//!
//! This crate reads commit history and release tags from a local git
//! repository and decides which commits belong to the next changelog.

mod commits;
mod remote;
mod repository;
mod tags;
#[cfg(test)]
mod testing;
pub mod types;

pub use remote::github_slug;
pub use repository::{GitRepo, Result};
pub use tags::select_latest_release;
pub use types::{CommitInfo, TagInfo};
