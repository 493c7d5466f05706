//! Changelog generation

use relnotes_core::config::ChangelogConfig;
use tracing::{debug, info, instrument};

use crate::changelog::Changelog;
use crate::classifier::{classifier_for, CommitClassifier};
use crate::formatter::{ChangelogFormatter, MarkdownFormatter};
use crate::types::CommitRecord;

/// Changelog generator
pub struct ChangelogGenerator {
    formatter: Box<dyn ChangelogFormatter>,
    config: ChangelogConfig,
}

impl ChangelogGenerator {
    /// Create a new generator with the Markdown formatter
    pub fn new(config: ChangelogConfig) -> Self {
        Self {
            formatter: Box::new(MarkdownFormatter::new()),
            config,
        }
    }

    fn classifier(&self) -> Box<dyn CommitClassifier> {
        classifier_for(self.config.kind)
    }

    /// Classify commits into a new changelog
    #[instrument(skip(self, commits), fields(commit_count = commits.len(), kind = %self.config.kind))]
    pub fn generate(&self, commits: &[CommitRecord]) -> Changelog {
        info!(commit_count = commits.len(), "generating changelog");

        let mut changelog = Changelog::with_boxed_classifier(
            self.config.title.clone(),
            self.config.effective_link_prefix(),
            self.classifier(),
        );
        changelog.extend(commits.iter().cloned());

        debug!(
            section_count = changelog.store().non_empty_sections().count(),
            "changelog sections built"
        );
        changelog
    }

    /// Format a changelog to string
    pub fn format(&self, changelog: &Changelog) -> String {
        self.formatter.format(changelog)
    }
}
