//! Changelog types

use serde::{Deserialize, Serialize};

use relnotes_git::CommitInfo;

/// A raw commit as delivered by a commit source
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommitRecord {
    /// Commit hash
    pub sha: String,
    /// Author name, empty when unknown
    #[serde(alias = "author")]
    pub author_name: String,
    /// Commit message as written
    #[serde(alias = "message")]
    pub raw_message: String,
}

impl CommitRecord {
    /// Create a new record
    pub fn new(
        sha: impl Into<String>,
        author_name: impl Into<String>,
        raw_message: impl Into<String>,
    ) -> Self {
        Self {
            sha: sha.into(),
            author_name: author_name.into(),
            raw_message: raw_message.into(),
        }
    }
}

impl From<&CommitInfo> for CommitRecord {
    /// Only the summary line of the message is carried over
    fn from(commit: &CommitInfo) -> Self {
        Self::new(&commit.hash, &commit.author, &commit.message)
    }
}

/// A commit filed under a category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassifiedEntry {
    /// Commit hash
    pub sha: String,
    /// Author name
    pub author_name: String,
    /// Message without its type token, trimmed
    pub stripped_message: String,
}
