//! A changelog being assembled for one release

use serde::Serialize;
use tracing::debug;

use relnotes_core::ChangelogKind;

use crate::classifier::{CommitClassifier, ConventionalClassifier};
use crate::formatter::{ChangelogFormatter, MarkdownFormatter};
use crate::store::ChangelogStore;
use crate::types::{ClassifiedEntry, CommitRecord};

/// Commits of one release, arranged by category.
///
/// Built once per report: commits are pushed in, then the changelog is
/// rendered.
#[derive(Serialize)]
pub struct Changelog {
    title: Option<String>,
    commit_link_prefix: Option<String>,
    kind: ChangelogKind,
    sections: ChangelogStore,
    #[serde(skip)]
    classifier: Box<dyn CommitClassifier>,
}

impl Changelog {
    /// Create a Conventional Commit changelog.
    ///
    /// Trailing slashes are stripped from `commit_link_prefix`; a prefix
    /// that ends up empty counts as no prefix.
    pub fn new(title: Option<String>, commit_link_prefix: Option<String>) -> Self {
        Self::with_classifier(title, commit_link_prefix, ConventionalClassifier)
    }

    /// Create a changelog using a specific classifier
    pub fn with_classifier<C: CommitClassifier + 'static>(
        title: Option<String>,
        commit_link_prefix: Option<String>,
        classifier: C,
    ) -> Self {
        Self::with_boxed_classifier(title, commit_link_prefix, Box::new(classifier))
    }

    pub(crate) fn with_boxed_classifier(
        title: Option<String>,
        commit_link_prefix: Option<String>,
        classifier: Box<dyn CommitClassifier>,
    ) -> Self {
        let commit_link_prefix = commit_link_prefix
            .map(|p| p.trim_end_matches('/').to_string())
            .filter(|p| !p.is_empty());

        Self {
            title,
            commit_link_prefix,
            kind: classifier.kind(),
            sections: ChangelogStore::new(),
            classifier,
        }
    }

    /// Classify a commit and file it, returning the category token
    pub fn push(&mut self, commit: CommitRecord) -> &'static str {
        let classification = self.classifier.classify(&commit.raw_message);
        let category = classification.category;
        debug!(sha = %commit.sha, category = category.token(), "classified commit");

        self.sections.push(
            category,
            ClassifiedEntry {
                sha: commit.sha,
                author_name: commit.author_name,
                stripped_message: classification.message,
            },
        );
        category.token()
    }

    /// Push every commit in order
    pub fn extend<I: IntoIterator<Item = CommitRecord>>(&mut self, commits: I) {
        for commit in commits {
            self.push(commit);
        }
    }

    /// The classified commits
    pub fn store(&self) -> &ChangelogStore {
        &self.sections
    }

    /// Title rendered as the top-level heading
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Commit link prefix, without trailing slash
    pub fn commit_link_prefix(&self) -> Option<&str> {
        self.commit_link_prefix.as_deref()
    }

    /// Kind of this changelog
    pub fn kind(&self) -> ChangelogKind {
        self.kind
    }

    /// Render as Markdown
    pub fn render_to_markdown(&self) -> String {
        MarkdownFormatter::new().format(self)
    }
}

impl std::fmt::Debug for Changelog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Changelog")
            .field("title", &self.title)
            .field("commit_link_prefix", &self.commit_link_prefix)
            .field("kind", &self.kind)
            .field("sections", &self.sections)
            .finish()
    }
}
