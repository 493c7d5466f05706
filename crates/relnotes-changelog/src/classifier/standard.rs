//! Standard classifier: one section for every commit

use relnotes_core::ChangelogKind;

use super::{Classification, CommitClassifier};
use crate::category::Category;

/// Files every commit under the terminal category, message untouched
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardClassifier;

impl CommitClassifier for StandardClassifier {
    fn classify(&self, message: &str) -> Classification {
        Classification {
            category: Category::others(),
            message: message.trim().to_string(),
        }
    }

    fn kind(&self) -> ChangelogKind {
        ChangelogKind::Standard
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_everything_is_others() {
        let c = StandardClassifier.classify(" feat: add login ");
        assert_eq!(c.category.token(), "others");
        assert_eq!(c.message, "feat: add login");
    }
}
