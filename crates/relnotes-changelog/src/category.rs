//! The fixed category table

use serde::Serialize;

/// A changelog section keyed by a Conventional Commit type.
///
/// Categories only exist as entries of [`CONVENTIONAL_CATEGORIES`]; their
/// `order` is their position in that table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Category {
    token: &'static str,
    title: &'static str,
    #[serde(skip)]
    order: usize,
}

impl Category {
    const fn new(token: &'static str, title: &'static str, order: usize) -> Self {
        Self {
            token,
            title,
            order,
        }
    }

    /// Commit type token, e.g. `feat`
    pub fn token(&self) -> &'static str {
        self.token
    }

    /// Section heading shown in the rendered changelog
    pub fn title(&self) -> &'static str {
        self.title
    }

    /// Priority of this category; lower sorts and matches first
    pub fn order(&self) -> usize {
        self.order
    }

    /// Look up a category by its token
    pub fn from_token(token: &str) -> Option<&'static Category> {
        CONVENTIONAL_CATEGORIES.iter().find(|c| c.token == token)
    }

    /// The terminal bucket for commits without a recognised type
    pub fn others() -> &'static Category {
        &CONVENTIONAL_CATEGORIES[CONVENTIONAL_CATEGORIES.len() - 1]
    }
}

/// Token of the terminal bucket
pub const OTHERS: &str = "others";

/// Categories in priority order. Matching walks this table top to bottom
/// and the first hit wins; rendering emits sections in the same order.
/// See <https://www.conventionalcommits.org/>.
pub static CONVENTIONAL_CATEGORIES: [Category; 11] = [
    Category::new("feat", "Features", 0),
    Category::new("fix", "Bug Fixes", 1),
    Category::new("perf", "Performance Improvements", 2),
    Category::new("docs", "Documentation", 3),
    Category::new("ci", "Continuous Integration", 4),
    Category::new("refactor", "Refactoring", 5),
    Category::new("test", "Tests", 6),
    Category::new("build", "Builds", 7),
    Category::new("revert", "Reverts", 8),
    Category::new("chore", "Chores", 9),
    Category::new(OTHERS, "Commits", 10),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_matches_position() {
        for (i, category) in CONVENTIONAL_CATEGORIES.iter().enumerate() {
            assert_eq!(category.order(), i);
        }
    }

    #[test]
    fn test_others_is_last() {
        assert_eq!(Category::others().token(), OTHERS);
        assert_eq!(Category::others().title(), "Commits");
    }

    #[test]
    fn test_tokens_are_unique() {
        let mut tokens: Vec<_> = CONVENTIONAL_CATEGORIES.iter().map(|c| c.token()).collect();
        tokens.sort_unstable();
        tokens.dedup();
        assert_eq!(tokens.len(), CONVENTIONAL_CATEGORIES.len());
    }

    #[test]
    fn test_from_token() {
        assert_eq!(Category::from_token("fix").unwrap().title(), "Bug Fixes");
        assert!(Category::from_token("feature").is_none());
    }
}
