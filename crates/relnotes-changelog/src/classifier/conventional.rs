//! Conventional Commits classifier
//!
//! Files a commit under the first category whose token starts the message
//! and is immediately followed by `:` or a space:
//! <https://www.conventionalcommits.org/>

use relnotes_core::ChangelogKind;

use super::{Classification, CommitClassifier};
use crate::category::{Category, CONVENTIONAL_CATEGORIES};

/// Classifier for Conventional Commit messages
#[derive(Debug, Clone, Copy, Default)]
pub struct ConventionalClassifier;

impl ConventionalClassifier {
    /// Create a new classifier
    pub fn new() -> Self {
        Self
    }
}

/// Remainder of `message` after `token` and one separator, if it matches
fn strip_token<'a>(message: &'a str, token: &str) -> Option<&'a str> {
    let rest = message.strip_prefix(token)?;
    rest.strip_prefix(':').or_else(|| rest.strip_prefix(' '))
}

impl CommitClassifier for ConventionalClassifier {
    fn classify(&self, message: &str) -> Classification {
        CONVENTIONAL_CATEGORIES
            .iter()
            .find_map(|category| {
                strip_token(message, category.token()).map(|rest| Classification {
                    category,
                    message: rest.trim().to_string(),
                })
            })
            .unwrap_or_else(|| Classification {
                category: Category::others(),
                message: message.trim().to_string(),
            })
    }

    fn kind(&self) -> ChangelogKind {
        ChangelogKind::Conventional
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(message: &str) -> (&'static str, String) {
        let c = ConventionalClassifier::new().classify(message);
        (c.category.token(), c.message)
    }

    #[test]
    fn test_colon_separator() {
        assert_eq!(classify("feat: add login"), ("feat", "add login".to_string()));
    }

    #[test]
    fn test_space_separator() {
        assert_eq!(classify("fix handle nulls"), ("fix", "handle nulls".to_string()));
    }

    #[test]
    fn test_colon_without_space() {
        assert_eq!(classify("docs:readme"), ("docs", "readme".to_string()));
    }

    #[test]
    fn test_surrounding_whitespace_trimmed() {
        assert_eq!(classify("perf:   faster io  \n"), ("perf", "faster io".to_string()));
    }

    #[test]
    fn test_no_partial_word_match() {
        assert_eq!(classify("feature: x"), ("others", "feature: x".to_string()));
        assert_eq!(classify("fixup! typo"), ("others", "fixup! typo".to_string()));
    }

    #[test]
    fn test_case_sensitive() {
        assert_eq!(classify("Feat: x"), ("others", "Feat: x".to_string()));
    }

    #[test]
    fn test_scoped_type_is_not_matched() {
        assert_eq!(
            classify("feat(ui): button"),
            ("others", "feat(ui): button".to_string())
        );
    }

    #[test]
    fn test_unrecognised_message() {
        assert_eq!(classify("  bump deps "), ("others", "bump deps".to_string()));
    }

    #[test]
    fn test_empty_message() {
        assert_eq!(classify(""), ("others", String::new()));
    }

    #[test]
    fn test_bare_token_without_separator() {
        assert_eq!(classify("chore"), ("others", "chore".to_string()));
    }

    #[test]
    fn test_only_one_separator_stripped() {
        assert_eq!(classify("ci: : odd"), ("ci", ": odd".to_string()));
    }

    #[test]
    fn test_others_token_is_stripped() {
        assert_eq!(classify("others: misc"), ("others", "misc".to_string()));
    }

    #[test]
    fn test_every_table_token_matches() {
        for category in CONVENTIONAL_CATEGORIES.iter() {
            let message = format!("{}: something", category.token());
            assert_eq!(classify(&message), (category.token(), "something".to_string()));
        }
    }

    #[test]
    fn test_multiline_message() {
        assert_eq!(
            classify("refactor: split module\n\nbody text"),
            ("refactor", "split module\n\nbody text".to_string())
        );
    }
}
