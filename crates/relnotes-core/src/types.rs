//! Core types for relnotes

use serde::{Deserialize, Serialize};

/// Kind of changelog being generated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangelogKind {
    /// Every commit listed under a single section
    #[default]
    Standard,
    /// Commits grouped by their Conventional Commit type
    Conventional,
}

impl ChangelogKind {
    /// All kinds, ordered by their numeric value
    pub const ALL: [ChangelogKind; 2] = [Self::Standard, Self::Conventional];

    /// Returns the string representation of the kind
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Conventional => "conventional",
        }
    }

    /// Numeric value accepted from the environment
    pub fn value(&self) -> u8 {
        match self {
            Self::Standard => 0,
            Self::Conventional => 1,
        }
    }

    /// Resolve a kind from an environment value.
    ///
    /// Accepts the numeric value or the name; anything unrecognised falls
    /// back to [`ChangelogKind::Standard`].
    pub fn from_env_value(value: &str) -> Self {
        value.parse().unwrap_or_default()
    }
}

impl std::fmt::Display for ChangelogKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ChangelogKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(n) = s.parse::<u8>() {
            return Self::ALL
                .into_iter()
                .find(|kind| kind.value() == n)
                .ok_or_else(|| format!("Unknown changelog kind: {}", s));
        }

        match s.to_lowercase().as_str() {
            "standard" => Ok(Self::Standard),
            "conventional" => Ok(Self::Conventional),
            _ => Err(format!("Unknown changelog kind: {}", s)),
        }
    }
}
