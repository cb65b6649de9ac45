use serde::{Deserialize, Serialize};

use crate::error::RosterError;

/// Default number of applicant cards shown per page.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 3;

fn default_items_per_page() -> usize {
    DEFAULT_ITEMS_PER_PAGE
}

fn default_title() -> String {
    "Applicant Details".to_string()
}

/// Settings for the roster component, read from the `[roster]` table.
///
/// Every field has a default so that a missing or partial config file
/// still yields a usable roster.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RosterConfig {
    #[serde(default = "default_items_per_page")]
    pub items_per_page: usize,
    #[serde(default = "default_title")]
    pub title: String,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            items_per_page: default_items_per_page(),
            title: default_title(),
        }
    }
}

impl RosterConfig {
    pub fn validate(&self) -> Result<(), RosterError> {
        if self.items_per_page == 0 {
            return Err(RosterError::config("items_per_page must be at least 1"));
        }
        Ok(())
    }
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub roster: RosterConfig,
}

impl AppConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(contents: &str) -> Result<Self, RosterError> {
        let config: AppConfig = toml::from_str(contents)?;
        config.roster.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RosterErrorKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_config_shows_three_per_page() {
        let config = RosterConfig::default();
        assert_eq!(config.items_per_page, 3);
        assert_eq!(config.title, "Applicant Details");
    }

    #[test]
    fn deserialize_empty_toml_uses_defaults() {
        let config = AppConfig::from_toml_str("").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn deserialize_partial_toml_defaults_missing_fields() {
        let config = AppConfig::from_toml_str(
            r#"
            [roster]
            items_per_page = 5
            "#,
        )
        .unwrap();
        assert_eq!(config.roster.items_per_page, 5);
        assert_eq!(config.roster.title, "Applicant Details");
    }

    #[test]
    fn zero_items_per_page_is_rejected() {
        let err = AppConfig::from_toml_str(
            r#"
            [roster]
            items_per_page = 0
            "#,
        )
        .unwrap_err();
        assert_eq!(err.kind, RosterErrorKind::ConfigError);
    }

    #[test]
    fn malformed_toml_is_a_config_error() {
        let err = AppConfig::from_toml_str("[roster\nitems_per_page = 3").unwrap_err();
        assert_eq!(err.kind, RosterErrorKind::ConfigError);
    }
}
