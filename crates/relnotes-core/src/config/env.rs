//! Environment overrides

use tracing::debug;

use crate::types::ChangelogKind;

use super::types::Config;

/// Overrides the changelog title
pub const ENV_TITLE: &str = "CHANGELOG_TITLE";

/// Overrides the changelog kind (`0`/`1` or `standard`/`conventional`)
pub const ENV_KIND: &str = "CHANGELOG_TYPE";

/// Repository slug set by GitHub Actions
pub const ENV_REPOSITORY: &str = "GITHUB_REPOSITORY";

impl Config {
    /// Apply overrides from the process environment
    pub fn apply_env(&mut self) {
        self.apply_env_from(|key| std::env::var(key).ok());
    }

    /// Apply overrides using the given variable lookup
    pub fn apply_env_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(title) = lookup(ENV_TITLE).filter(|v| !v.is_empty()) {
            debug!(title = %title, "title set from environment");
            self.changelog.title = Some(title);
        }

        if let Some(kind) = lookup(ENV_KIND) {
            let kind = ChangelogKind::from_env_value(&kind);
            debug!(%kind, "changelog kind set from environment");
            self.changelog.kind = kind;
        }

        if let Some(slug) = lookup(ENV_REPOSITORY).filter(|v| !v.is_empty()) {
            debug!(repository = %slug, "repository set from environment");
            self.changelog.repository = Some(slug);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_env_overrides() {
        let mut config = Config::default();
        config.apply_env_from(lookup(&[
            (ENV_TITLE, "v1.2.0"),
            (ENV_KIND, "1"),
            (ENV_REPOSITORY, "owner/repo"),
        ]));

        assert_eq!(config.changelog.title.as_deref(), Some("v1.2.0"));
        assert_eq!(config.changelog.kind, ChangelogKind::Conventional);
        assert_eq!(config.changelog.repository.as_deref(), Some("owner/repo"));
    }

    #[test]
    fn test_unknown_kind_falls_back_to_standard() {
        let mut config = Config::default();
        config.changelog.kind = ChangelogKind::Conventional;
        config.apply_env_from(lookup(&[(ENV_KIND, "fancy")]));
        assert_eq!(config.changelog.kind, ChangelogKind::Standard);
    }

    #[test]
    fn test_missing_vars_keep_file_values() {
        let mut config = Config::default();
        config.changelog.title = Some("from file".to_string());
        config.apply_env_from(lookup(&[(ENV_TITLE, "")]));
        assert_eq!(config.changelog.title.as_deref(), Some("from file"));
    }
}
