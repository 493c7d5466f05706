//! Per-category storage of classified commits

use serde::Serialize;

use crate::category::{Category, CONVENTIONAL_CATEGORIES};
use crate::types::ClassifiedEntry;

/// A category together with the commits filed under it
#[derive(Debug, Clone, Serialize)]
pub struct Section {
    /// The category of this section
    #[serde(flatten)]
    pub category: Category,
    /// Entries in arrival order
    pub entries: Vec<ClassifiedEntry>,
}

impl Section {
    fn new(category: Category) -> Self {
        Self {
            category,
            entries: Vec::new(),
        }
    }

    /// Check if section is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Classified commits for one changelog, one section per category.
///
/// Every category of [`CONVENTIONAL_CATEGORIES`] has a section from
/// construction on, in table order.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct ChangelogStore {
    sections: Vec<Section>,
}

impl ChangelogStore {
    /// Create a store with every category present and empty
    pub fn new() -> Self {
        Self {
            sections: CONVENTIONAL_CATEGORIES.iter().copied().map(Section::new).collect(),
        }
    }

    /// Append an entry to the section of `category`
    pub fn push(&mut self, category: &Category, entry: ClassifiedEntry) {
        self.sections[category.order()].entries.push(entry);
    }

    /// Entries filed under `token`; `None` for tokens outside the table
    pub fn get(&self, token: &str) -> Option<&[ClassifiedEntry]> {
        Category::from_token(token).map(|c| self.sections[c.order()].entries.as_slice())
    }

    /// All sections in table order, including empty ones
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Sections that have at least one entry
    pub fn non_empty_sections(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter().filter(|s| !s.is_empty())
    }

    /// Total number of entries
    pub fn len(&self) -> usize {
        self.sections.iter().map(|s| s.entries.len()).sum()
    }

    /// Check if no commit has been stored
    pub fn is_empty(&self) -> bool {
        self.sections.iter().all(Section::is_empty)
    }
}

impl Default for ChangelogStore {
    fn default() -> Self {
        Self::new()
    }
}
