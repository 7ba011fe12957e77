// File: src/config.rs
// Purpose: Configuration parsing from folio.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub app: AppConfig,

    #[serde(default)]
    pub routing: RoutingConfig,

    #[serde(default)]
    pub log: LogConfig,
}

/// Application metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_name")]
    pub name: String,

    /// Path the navigator starts on
    #[serde(default = "default_initial_path")]
    pub initial_path: String,
}

/// Which parameter name the user-detail route binds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UserParam {
    #[default]
    Username,
    Id,
}

impl UserParam {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserParam::Username => "username",
            UserParam::Id => "id",
        }
    }
}

/// Routing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutingConfig {
    /// Whether routes are case-insensitive (default: true)
    #[serde(default = "default_true")]
    pub case_insensitive: bool,

    /// Where unmatched paths are sent; an empty string disables the catch-all
    #[serde(default = "default_fallback_redirect")]
    pub fallback_redirect: Option<String>,

    /// Parameter name of the user-detail route (default: username)
    #[serde(default)]
    pub user_param: UserParam,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Filter used when FOLIO_LOG is unset, e.g. "info" or "folio_router=debug"
    #[serde(default = "default_level")]
    pub level: String,
}

// Default values
fn default_name() -> String {
    "folio".to_string()
}

fn default_initial_path() -> String {
    "/".to_string()
}

fn default_fallback_redirect() -> Option<String> {
    Some("/".to_string())
}

fn default_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            initial_path: default_initial_path(),
        }
    }
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            case_insensitive: true,
            fallback_redirect: default_fallback_redirect(),
            user_param: UserParam::default(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

impl RoutingConfig {
    /// Catch-all redirect target, if the catch-all is enabled
    pub fn fallback(&self) -> Option<&str> {
        self.fallback_redirect
            .as_deref()
            .map(str::trim)
            .filter(|target| !target.is_empty())
    }
}

impl Config {
    /// Load configuration from a folio.toml file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // If file doesn't exist, return default config
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }
}
