// Configuration module for dealerdash
// This module handles loading configuration from ~/.config/dealerdash/config.toml
// and overlaying DEALERDASH_* environment variables

mod types;

pub use types::{
    ApiConfig, ApiKey, AuthMethod, Config, ConfigError, ENV_API_KEY, ENV_AUTH_METHOD,
    ENV_ODOO_DB, ENV_ODOO_URL, NotificationsConfig,
};

use std::fs;
use std::path::{Path, PathBuf};

/// Result of loading configuration
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

/// Loads configuration from ~/.config/dealerdash/config.toml, then applies
/// environment overrides. Never fails: problems become a warning.
pub fn load_config() -> ConfigResult {
    load_config_with_env(&get_config_path(), |name| std::env::var(name).ok())
}

/// Same as `load_config` with an explicit file and environment
pub fn load_config_with_env<F>(path: &Path, lookup: F) -> ConfigResult
where
    F: Fn(&str) -> Option<String>,
{
    let mut result = load_config_from(path);

    if let Err(e) = result.config.apply_env_overrides(lookup) {
        #[cfg(debug_assertions)]
        log::error!("Invalid environment override: {}", e);

        let warning = format!("Invalid environment: {}", e);
        result.warning = Some(match result.warning.take() {
            Some(existing) => format!("{}; {}", existing, warning),
            None => warning,
        });
    }

    result
}

/// Loads configuration from a TOML file.
/// Returns default configuration if file doesn't exist or on parse errors
pub fn load_config_from(config_path: &Path) -> ConfigResult {
    #[cfg(debug_assertions)]
    log::debug!("Loading config from {:?}", config_path);

    // If file doesn't exist, return defaults silently
    if !config_path.exists() {
        #[cfg(debug_assertions)]
        log::debug!("Config file does not exist, using defaults");
        return ConfigResult {
            config: Config::default(),
            warning: None,
        };
    }

    let contents = match fs::read_to_string(config_path) {
        Ok(contents) => {
            #[cfg(debug_assertions)]
            log::debug!("Config file read successfully, {} bytes", contents.len());
            contents
        }
        Err(e) => {
            #[cfg(debug_assertions)]
            log::error!("Failed to read config file {:?}: {}", config_path, e);
            return ConfigResult {
                config: Config::default(),
                warning: Some(format!("Failed to read config: {}", e)),
            };
        }
    };

    match toml::from_str::<Config>(&contents) {
        Ok(config) => {
            #[cfg(debug_assertions)]
            log::debug!(
                "Config parsed successfully: endpoint {}",
                config.api.graphql_url()
            );
            ConfigResult {
                config,
                warning: None,
            }
        }
        Err(e) => {
            #[cfg(debug_assertions)]
            log::error!("Failed to parse config file {:?}: {}", config_path, e);
            ConfigResult {
                config: Config::default(),
                warning: Some(format!("Invalid config: {}", e)),
            }
        }
    }
}

/// Returns the path to the configuration file
///
/// Always uses ~/.config/dealerdash/config.toml on all platforms for consistency.
pub fn get_config_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("dealerdash")
        .join("config.toml")
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
