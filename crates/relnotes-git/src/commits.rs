//! Commit history operations

use chrono::{TimeZone, Utc};
use git2::{Oid, Sort};
use tracing::{debug, info, instrument};

use relnotes_core::error::GitError;

use crate::repository::{GitRepo, Result};
use crate::types::{CommitInfo, TagInfo};

impl GitRepo {
    /// Get commits reachable from HEAD but not from `since` (any revision)
    pub fn commits_since(&self, since: &str) -> Result<Vec<CommitInfo>> {
        let object = self
            .repo
            .revparse_single(since)
            .map_err(|_| GitError::UnknownRevision(since.to_string()))?;
        let since_oid = object.peel_to_commit()?.id();
        self.commits_since_oid(since_oid)
    }

    /// Get commits since a specific OID, newest first
    pub fn commits_since_oid(&self, since: Oid) -> Result<Vec<CommitInfo>> {
        let head = self.head_commit()?;

        let mut revwalk = self.repo.revwalk()?;
        revwalk.set_sorting(Sort::TOPOLOGICAL | Sort::TIME)?;
        revwalk.push(head.id())?;
        revwalk.hide(since)?;

        let mut commits = Vec::new();

        for oid in revwalk {
            let oid = oid?;
            let commit = self.repo.find_commit(oid)?;
            commits.push(commit_to_info(&commit));
        }

        Ok(commits)
    }

    /// Commits that belong to the next release.
    ///
    /// Everything since the latest release tag. Without any release, only
    /// the commit at HEAD (everything since `HEAD^1`), or the lone commit of
    /// a single-commit history.
    #[instrument(skip(self), fields(pattern))]
    pub fn release_commits(
        &self,
        pattern: Option<&str>,
    ) -> Result<(Option<TagInfo>, Vec<CommitInfo>)> {
        let latest = self.latest_release(pattern)?;

        let commits = match &latest {
            Some(tag) => {
                info!(tag = %tag.name, "collecting commits since latest release");
                let oid = Oid::from_str(&tag.commit_hash)?;
                let target = self.repo.find_object(oid, None)?.peel_to_commit()?;
                self.commits_since_oid(target.id())?
            }
            None => {
                let head = self.head_commit()?;
                match head.parent_id(0) {
                    Ok(parent) => {
                        info!("no release found, using commits since HEAD^1");
                        self.commits_since_oid(parent)?
                    }
                    Err(_) => {
                        debug!("no release and no parent commit, using HEAD only");
                        vec![commit_to_info(&head)]
                    }
                }
            }
        };

        debug!(count = commits.len(), "found release commits");
        Ok((latest, commits))
    }
}

/// Convert a git2 Commit to CommitInfo
fn commit_to_info(commit: &git2::Commit<'_>) -> CommitInfo {
    let hash = commit.id().to_string();
    let author = commit.author();

    let message = commit
        .message()
        .and_then(|m| m.lines().next())
        .unwrap_or_default()
        .to_string();

    let timestamp = Utc
        .timestamp_opt(commit.time().seconds(), 0)
        .single()
        .unwrap_or_else(Utc::now);

    let info = CommitInfo::new(
        hash,
        message,
        author.name().unwrap_or_default(),
        author.email().unwrap_or_default(),
        timestamp,
    );

    match commit.body() {
        Some(body) => info.with_body(body),
        None => info,
    }
}

#[cfg(test)]
mod tests {
    use crate::repository::GitRepo;
    use crate::testing::Fixture;

    #[test]
    fn test_subject_and_body_split() {
        let mut fx = Fixture::new();
        fx.commit("Initial commit");
        fx.commit_as("Ada", "fix: handle tabs\n\nLonger explanation here.");

        let repo = GitRepo::open(fx.path()).unwrap();
        let (_, commits) = repo.release_commits(None).unwrap();
        assert_eq!(commits[0].message, "fix: handle tabs");
        assert_eq!(commits[0].author, "Ada");
        assert_eq!(commits[0].body.as_deref(), Some("Longer explanation here."));
    }

    #[test]
    fn test_wrapped_subject_keeps_first_line() {
        let mut fx = Fixture::new();
        fx.commit("Initial commit");
        fx.commit("feat: add login\nwrapped second line without blank");

        let repo = GitRepo::open(fx.path()).unwrap();
        let (_, commits) = repo.release_commits(None).unwrap();
        assert_eq!(commits[0].message, "feat: add login");
    }

    #[test]
    fn test_commits_since_revision() {
        let mut fx = Fixture::new();
        let base = fx.commit("Initial commit");
        fx.commit("feat: one");
        fx.commit("fix: two");

        let repo = GitRepo::open(fx.path()).unwrap();
        let commits = repo.commits_since(&base.to_string()).unwrap();
        let messages: Vec<_> = commits.iter().map(|c| c.message.as_str()).collect();
        assert_eq!(messages, vec!["fix: two", "feat: one"]);
    }

    #[test]
    fn test_commits_since_unknown_revision() {
        let mut fx = Fixture::new();
        fx.commit("Initial commit");

        let repo = GitRepo::open(fx.path()).unwrap();
        assert!(repo.commits_since("does-not-exist").is_err());
    }

    #[test]
    fn test_commits_since_tag_name() {
        let mut fx = Fixture::new();
        let first = fx.commit("Initial commit");
        fx.lightweight_tag("v1.0.0", first);
        fx.commit("feat: after release");

        let repo = GitRepo::open(fx.path()).unwrap();
        let commits = repo.commits_since("v1.0.0").unwrap();
        assert_eq!(commits.len(), 1);
        assert_eq!(commits[0].message, "feat: after release");
    }

    #[test]
    fn test_release_commits_since_latest_release() {
        let mut fx = Fixture::new();
        let first = fx.commit("Initial commit");
        fx.annotated_tag("v1.0.0", first);
        fx.commit("feat: a");
        fx.commit("fix: b");

        let repo = GitRepo::open(fx.path()).unwrap();
        let (tag, commits) = repo.release_commits(None).unwrap();
        assert_eq!(tag.unwrap().name, "v1.0.0");
        assert_eq!(commits.len(), 2);
    }

    #[test]
    fn test_release_commits_without_release_uses_head() {
        let mut fx = Fixture::new();
        fx.commit("Initial commit");
        fx.commit("feat: a");
        fx.commit("fix: b");

        let repo = GitRepo::open(fx.path()).unwrap();
        let (tag, commits) = repo.release_commits(None).unwrap();
        assert!(tag.is_none());
        assert_eq!(commits.len(), 1);
        assert_eq!(commits[0].message, "fix: b");
    }

    #[test]
    fn test_release_commits_single_commit_history() {
        let mut fx = Fixture::new();
        fx.commit("Initial commit");

        let repo = GitRepo::open(fx.path()).unwrap();
        let (_, commits) = repo.release_commits(None).unwrap();
        assert_eq!(commits.len(), 1);
        assert_eq!(commits[0].message, "Initial commit");
    }
}
