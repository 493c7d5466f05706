//! Configuration types

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::types::ChangelogKind;

/// Main configuration for relnotes
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Changelog configuration
    pub changelog: ChangelogConfig,

    /// Git configuration
    pub git: GitConfig,
}

/// Changelog configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChangelogConfig {
    /// Which changelog layout to produce
    pub kind: ChangelogKind,

    /// Title rendered as the top-level heading, usually the tag name
    pub title: Option<String>,

    /// Prefix for commit links; the commit hash is appended after a `/`
    pub commit_link_prefix: Option<String>,

    /// Repository slug (`owner/name`) used to build GitHub commit links
    pub repository: Option<String>,

    /// Changelog file path
    pub file: PathBuf,
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        Self {
            kind: ChangelogKind::default(),
            title: None,
            commit_link_prefix: None,
            repository: None,
            file: PathBuf::from("CHANGELOG.md"),
        }
    }
}

impl ChangelogConfig {
    /// Link prefix to use when rendering.
    ///
    /// An explicit prefix wins over one derived from the repository slug.
    pub fn effective_link_prefix(&self) -> Option<String> {
        if let Some(prefix) = &self.commit_link_prefix {
            return Some(prefix.clone());
        }

        self.repository
            .as_ref()
            .filter(|slug| !slug.is_empty())
            .map(|slug| format!("https://github.com/{}/commit", slug))
    }
}

/// Git configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GitConfig {
    /// Remote used to derive the repository slug
    pub remote: String,

    /// Regex restricting which tags count as releases
    pub tag_pattern: Option<String>,
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            remote: "origin".to_string(),
            tag_pattern: None,
        }
    }
}
