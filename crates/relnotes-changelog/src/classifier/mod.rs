//! Commit classification

mod conventional;
mod standard;

pub use conventional::ConventionalClassifier;
pub use standard::StandardClassifier;

use relnotes_core::ChangelogKind;

use crate::category::Category;

/// Outcome of classifying one commit message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    /// Category the commit is filed under
    pub category: &'static Category,
    /// Message with the type token and separator removed, trimmed
    pub message: String,
}

/// Trait for commit classifiers.
///
/// Classification is total: every message lands in exactly one category.
pub trait CommitClassifier: Send + Sync {
    /// Classify a raw commit message
    fn classify(&self, message: &str) -> Classification;

    /// The changelog kind this classifier produces
    fn kind(&self) -> ChangelogKind;
}

/// Classifier for the given changelog kind
pub fn classifier_for(kind: ChangelogKind) -> Box<dyn CommitClassifier> {
    match kind {
        ChangelogKind::Standard => Box::new(StandardClassifier),
        ChangelogKind::Conventional => Box::new(ConventionalClassifier),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classifier_for_kind() {
        for kind in ChangelogKind::ALL {
            assert_eq!(classifier_for(kind).kind(), kind);
        }
    }
}
