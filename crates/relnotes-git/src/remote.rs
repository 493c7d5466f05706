//! Remote lookups

use tracing::debug;

use crate::repository::{GitRepo, Result};
use relnotes_core::error::GitError;

impl GitRepo {
    /// Get the URL for a remote
    pub fn remote_url(&self, name: &str) -> Result<Option<String>> {
        match self.repo.find_remote(name) {
            Ok(remote) => Ok(remote.url().map(|s| s.to_string())),
            Err(e) if e.code() == git2::ErrorCode::NotFound => {
                Err(GitError::RemoteNotFound(name.to_string()))
            }
            Err(e) => Err(GitError::Git2(e)),
        }
    }

    /// `owner/name` of the GitHub repository behind a remote, if any
    pub fn github_repository(&self, remote: &str) -> Result<Option<String>> {
        let slug = self.remote_url(remote)?.as_deref().and_then(github_slug);
        debug!(remote, slug = ?slug, "resolved GitHub repository");
        Ok(slug)
    }
}

/// Extract `owner/name` from a GitHub remote URL.
///
/// Handles `https://github.com/owner/name(.git)`, `ssh://git@github.com/...`
/// and the scp-like `git@github.com:owner/name(.git)` form.
pub fn github_slug(url: &str) -> Option<String> {
    let path = url
        .strip_prefix("https://github.com/")
        .or_else(|| url.strip_prefix("http://github.com/"))
        .or_else(|| url.strip_prefix("ssh://git@github.com/"))
        .or_else(|| url.strip_prefix("git@github.com:"))?;

    let path = path.trim_end_matches('/');
    let path = path.strip_suffix(".git").unwrap_or(path);

    let mut parts = path.split('/');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(owner), Some(name), None) if !owner.is_empty() && !name.is_empty() => {
            Some(format!("{}/{}", owner, name))
        }
        _ => None,
    }
}
