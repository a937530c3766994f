// Configuration type definitions

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

/// Configuration problems that make the backend settings unusable
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Configuration validation failed: {}", .0.join(", "))]
    Validation(Vec<String>),

    #[error("Unknown auth method '{0}' (expected \"apikey\" or \"session\")")]
    UnknownAuthMethod(String),
}

/// How requests authenticate against the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AuthMethod {
    #[default]
    Apikey,
    Session,
}

impl FromStr for AuthMethod {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "apikey" => Ok(AuthMethod::Apikey),
            "session" => Ok(AuthMethod::Session),
            _ => Err(ConfigError::UnknownAuthMethod(s.to_string())),
        }
    }
}

/// API key; never printed by `Debug`
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

/// Backend API configuration section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub odoo_url: String,
    pub database: String,
    pub auth_method: AuthMethod,
    pub graphql_path: String,
    pub default_limit: u32,
    pub default_offset: u32,
    /// Placeholders: `{model}`, `{id}`, `{field}`
    pub image_url_pattern: String,
    pub api_key: Option<ApiKey>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            odoo_url: "https://portal.alromaihcars.com".to_string(),
            database: "alromaih_cars".to_string(),
            auth_method: AuthMethod::Apikey,
            graphql_path: "/graphql".to_string(),
            default_limit: 100,
            default_offset: 0,
            image_url_pattern: "/web/image/{model}/{id}/{field}".to_string(),
            api_key: None,
        }
    }
}

impl ApiConfig {
    fn base_url(&self) -> &str {
        self.odoo_url.trim_end_matches('/')
    }

    /// Full GraphQL endpoint URL
    pub fn graphql_url(&self) -> String {
        format!("{}{}", self.base_url(), self.graphql_path)
    }

    /// URL of an image field on a backend record
    pub fn image_url(&self, model: &str, id: &str, field: &str) -> String {
        let path = self
            .image_url_pattern
            .replace("{model}", model)
            .replace("{id}", id)
            .replace("{field}", field);
        format!("{}{}", self.base_url(), path)
    }

    /// Check that the settings are usable. Reports every problem at once.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if self.api_key.as_ref().is_none_or(|k| k.expose().is_empty()) {
            errors.push("API key is required but not set".to_string());
        }

        if self.odoo_url.trim().is_empty() {
            errors.push("odoo_url is required".to_string());
        } else if !(self.odoo_url.starts_with("http://") || self.odoo_url.starts_with("https://")) {
            errors.push(format!(
                "odoo_url must start with http:// or https:// (got '{}')",
                self.odoo_url
            ));
        }

        if !self.graphql_path.starts_with('/') {
            errors.push("graphql_path must start with '/'".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }
}

/// Notification configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct NotificationsConfig {
    #[serde(default = "default_duration_ms")]
    pub default_duration_ms: u64,
    #[serde(default = "default_max_visible")]
    pub max_visible: usize,
}

fn default_duration_ms() -> u64 {
    3000
}

fn default_max_visible() -> usize {
    5
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        NotificationsConfig {
            default_duration_ms: default_duration_ms(),
            max_visible: default_max_visible(),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub notifications: NotificationsConfig,
}

pub const ENV_ODOO_URL: &str = "DEALERDASH_ODOO_URL";
pub const ENV_ODOO_DB: &str = "DEALERDASH_ODOO_DB";
pub const ENV_AUTH_METHOD: &str = "DEALERDASH_AUTH_METHOD";
pub const ENV_API_KEY: &str = "DEALERDASH_API_KEY";

impl Config {
    /// Overlay values from the environment onto the file settings.
    ///
    /// `lookup` is `std::env::var` in production. Empty values are ignored.
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        if let Some(url) = get(ENV_ODOO_URL) {
            self.api.odoo_url = url;
        }
        if let Some(db) = get(ENV_ODOO_DB) {
            self.api.database = db;
        }
        if let Some(key) = get(ENV_API_KEY) {
            self.api.api_key = Some(ApiKey::new(key));
        }
        if let Some(method) = get(ENV_AUTH_METHOD) {
            self.api.auth_method = method.parse()?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
