//! Markdown changelog formatter

use tracing::{debug, instrument};

use super::ChangelogFormatter;
use crate::changelog::Changelog;
use crate::store::ChangelogStore;
use crate::types::ClassifiedEntry;

/// Markdown changelog formatter
///
/// ```text
/// # v1.2.0
///
/// ## Features
/// * add login ([ada](https://github.com/owner/repo/commit/3f2a...))
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    /// Create a new markdown formatter
    pub fn new() -> Self {
        Self
    }

    /// Render a store.
    ///
    /// Each non-empty section is preceded by an empty line, the first one
    /// included, even without a title.
    #[instrument(skip(self, store), fields(entries = store.len()))]
    pub fn render(
        &self,
        store: &ChangelogStore,
        title: Option<&str>,
        commit_link_prefix: Option<&str>,
    ) -> String {
        let mut lines = Vec::new();

        if let Some(title) = title {
            lines.push(format!("# {}", title));
        }

        for section in store.non_empty_sections() {
            lines.push(String::new());
            lines.push(format!("## {}", section.category.title()));

            for entry in &section.entries {
                lines.push(format!(
                    "* {} {}",
                    entry.stripped_message,
                    author_suffix(entry, commit_link_prefix)
                ));
            }
        }

        let output = lines.join("\n");
        debug!(output_len = output.len(), "markdown changelog formatted");
        output
    }
}

/// `([author](prefix/sha))` with a link prefix, `(author)` without
fn author_suffix(entry: &ClassifiedEntry, commit_link_prefix: Option<&str>) -> String {
    match commit_link_prefix {
        Some(prefix) => format!("([{}]({}/{}))", entry.author_name, prefix, entry.sha),
        None => format!("({})", entry.author_name),
    }
}

impl ChangelogFormatter for MarkdownFormatter {
    fn format(&self, changelog: &Changelog) -> String {
        self.render(
            changelog.store(),
            changelog.title(),
            changelog.commit_link_prefix(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CommitRecord;

    fn changelog_with(
        title: Option<&str>,
        prefix: Option<&str>,
        commits: &[(&str, &str, &str)],
    ) -> Changelog {
        let mut changelog = Changelog::new(title.map(String::from), prefix.map(String::from));
        for (sha, author, message) in commits {
            changelog.push(CommitRecord::new(*sha, *author, *message));
        }
        changelog
    }

    #[test]
    fn test_full_document() {
        let changelog = changelog_with(
            Some("v1.0.0"),
            None,
            &[
                ("1", "ada", "fix: crash on start"),
                ("2", "bob", "feat: add login"),
                ("3", "cy", "bump deps"),
                ("4", "ada", "feat: add logout"),
            ],
        );

        let expected = "# v1.0.0\n\
                        \n\
                        ## Features\n\
                        * add login (bob)\n\
                        * add logout (ada)\n\
                        \n\
                        ## Bug Fixes\n\
                        * crash on start (ada)\n\
                        \n\
                        ## Commits\n\
                        * bump deps (cy)";
        assert_eq!(changelog.render_to_markdown(), expected);
    }

    #[test]
    fn test_only_fix_without_title() {
        let changelog = changelog_with(None, None, &[("1", "bob", "fix: typo")]);
        let output = changelog.render_to_markdown();

        assert_eq!(output.matches("## ").count(), 1);
        assert!(output.contains("## Bug Fixes"));
        assert!(!output.lines().any(|l| l.starts_with("# ")));
    }

    #[test]
    fn test_leading_blank_line_without_title() {
        let changelog = changelog_with(None, None, &[("1", "bob", "fix: typo")]);
        assert_eq!(changelog.render_to_markdown(), "\n## Bug Fixes\n* typo (bob)");
    }

    #[test]
    fn test_author_link() {
        let changelog = changelog_with(
            None,
            Some("https://x/commits/"),
            &[("abc123", "bob", "feat: thing")],
        );
        let output = changelog.render_to_markdown();

        assert!(output.ends_with("* thing ([bob](https://x/commits/abc123))"));
        assert!(!output.contains("commits//"));
    }

    #[test]
    fn test_author_without_link() {
        let changelog = changelog_with(None, None, &[("abc123", "bob", "feat: thing")]);
        assert!(changelog.render_to_markdown().ends_with("* thing (bob)"));
    }

    #[test]
    fn test_missing_author_renders_empty() {
        let changelog = changelog_with(None, None, &[("abc123", "", "docs: readme")]);
        assert!(changelog.render_to_markdown().ends_with("* readme ()"));
    }

    #[test]
    fn test_empty_store() {
        let changelog = changelog_with(None, None, &[]);
        assert_eq!(changelog.render_to_markdown(), "");

        let titled = changelog_with(Some("v2"), None, &[]);
        assert_eq!(titled.render_to_markdown(), "# v2");
    }

    #[test]
    fn test_render_is_idempotent() {
        let changelog = changelog_with(
            Some("v1"),
            Some("https://x/c"),
            &[("1", "a", "feat: x"), ("2", "b", "chore: y")],
        );
        let first = changelog.render_to_markdown();
        let second = changelog.render_to_markdown();
        assert_eq!(first, second);
        assert_eq!(changelog.store().len(), 2);
    }
}
