//! Configuration validation

use regex::Regex;
use tracing::debug;

use crate::error::{ConfigError, Result};

use super::types::Config;

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    debug!("validating configuration");
    validate_git(config)?;
    validate_changelog(config)?;
    debug!("configuration validation passed");
    Ok(())
}

fn validate_git(config: &Config) -> Result<()> {
    if config.git.remote.is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "git.remote".to_string(),
            message: "remote cannot be empty".to_string(),
        }
        .into());
    }

    if let Some(pattern) = &config.git.tag_pattern {
        if let Err(e) = Regex::new(pattern) {
            return Err(ConfigError::InvalidValue {
                field: "git.tag_pattern".to_string(),
                message: format!("not a valid regex: {}", e),
            }
            .into());
        }
    }

    Ok(())
}

fn validate_changelog(config: &Config) -> Result<()> {
    if let Some(slug) = &config.changelog.repository {
        let mut parts = slug.split('/');
        let valid = matches!(
            (parts.next(), parts.next(), parts.next()),
            (Some(owner), Some(name), None) if !owner.is_empty() && !name.is_empty()
        );
        if !valid {
            return Err(ConfigError::InvalidValue {
                field: "changelog.repository".to_string(),
                message: "must look like owner/name".to_string(),
            }
            .into());
        }
    }

    if config.changelog.file.as_os_str().is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "changelog.file".to_string(),
            message: "file cannot be empty".to_string(),
        }
        .into());
    }

    Ok(())
}
