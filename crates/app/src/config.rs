use shared_types::{AppConfig, RosterConfig};
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Bundled at compile time so web builds need no filesystem access.
const CONFIG_TOML: &str = include_str!("../../../config.toml");

/// Parse the bundled `config.toml` once. Safe to call repeatedly; only the
/// first call parses.
///
/// An invalid file is logged and replaced by defaults.
pub fn load_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| parse_or_default(CONFIG_TOML))
}

pub fn roster_config() -> &'static RosterConfig {
    &load_config().roster
}

fn parse_or_default(contents: &str) -> AppConfig {
    match AppConfig::from_toml_str(contents) {
        Ok(config) => {
            tracing::info!(
                items_per_page = config.roster.items_per_page,
                "roster config loaded"
            );
            config
        }
        Err(err) => {
            tracing::warn!(error = %err, "invalid config.toml, using defaults");
            AppConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn bundled_config_parses() {
        let config = AppConfig::from_toml_str(CONFIG_TOML).unwrap();
        assert_eq!(config.roster.items_per_page, 3);
    }

    #[test]
    fn invalid_config_falls_back_to_defaults() {
        let config = parse_or_default("[roster]\nitems_per_page = 0\n");
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn load_config_is_stable() {
        assert!(std::ptr::eq(load_config(), load_config()));
        assert_eq!(roster_config().title, "Applicant Details");
    }
}
