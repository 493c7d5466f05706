//! Tag operations and release lookup

use chrono::{TimeZone, Utc};
use regex::Regex;
use tracing::{debug, instrument};

use crate::repository::{GitRepo, Result};
use crate::types::TagInfo;
use relnotes_core::error::GitError;

impl GitRepo {
    /// Get all tags
    #[instrument(skip(self))]
    pub fn tags(&self) -> Result<Vec<TagInfo>> {
        let mut tags = Vec::new();

        self.repo.tag_foreach(|oid, name| {
            let name = String::from_utf8_lossy(name)
                .trim_start_matches("refs/tags/")
                .to_string();

            if let Ok(commit) = self.repo.find_commit(oid) {
                let created = Utc
                    .timestamp_opt(commit.time().seconds(), 0)
                    .single()
                    .unwrap_or_else(Utc::now);
                tags.push(TagInfo::new(&name, commit.id().to_string(), created));
            } else if let Ok(tag) = self.repo.find_tag(oid) {
                // Annotated tag
                let created = tag
                    .tagger()
                    .and_then(|tagger| Utc.timestamp_opt(tagger.when().seconds(), 0).single())
                    .unwrap_or_else(Utc::now);
                let mut tag_info = TagInfo::new(&name, tag.target_id().to_string(), created);

                if let Some(msg) = tag.message() {
                    tag_info = tag_info.with_message(msg.trim());
                }

                tags.push(tag_info);
            }

            true
        })?;

        debug!(count = tags.len(), "listed all tags");
        Ok(tags)
    }

    /// Get tags matching a pattern
    pub fn tags_matching(&self, pattern: &str) -> Result<Vec<TagInfo>> {
        let regex = Regex::new(pattern).map_err(|e| GitError::InvalidTagPattern {
            pattern: pattern.to_string(),
            reason: e.to_string(),
        })?;

        let matching: Vec<_> = self
            .tags()?
            .into_iter()
            .filter(|t| regex.is_match(&t.name))
            .collect();

        Ok(matching)
    }

    /// Find the tag of the latest release, see [`select_latest_release`]
    #[instrument(skip(self), fields(pattern))]
    pub fn latest_release(&self, pattern: Option<&str>) -> Result<Option<TagInfo>> {
        let tags = match pattern {
            Some(p) => self.tags_matching(p)?,
            None => self.tags()?,
        };

        let latest = select_latest_release(tags);
        debug!(latest = ?latest.as_ref().map(|t| &t.name), "found latest release");
        Ok(latest)
    }
}

/// Pick the latest release among `tags`.
///
/// The most recently created versioned tag wins, ties going to the higher
/// semantic version. Rolling tags such as `continuous` are only considered
/// when no versioned tag exists.
pub fn select_latest_release(tags: Vec<TagInfo>) -> Option<TagInfo> {
    let (versioned, rolling): (Vec<_>, Vec<_>) =
        tags.into_iter().partition(TagInfo::is_versioned);

    let latest_versioned = versioned
        .into_iter()
        .max_by(|a, b| a.created.cmp(&b.created).then_with(|| a.semver().cmp(&b.semver())));

    latest_versioned.or_else(|| rolling.into_iter().max_by_key(|t| t.created))
}
