//! Bootstrap configuration loading
//!
//! Settings are resolved in priority order:
//! 1. Command-line arguments (applied by the binary)
//! 2. TOML config file
//! 3. Built-in defaults (code constants)
//!
//! The TOML file is optional. An explicit path must exist; otherwise the
//! per-user default location is used only when a file is present there.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, info};

use crate::endpoint::DEFAULT_API_BASE_URL;
use crate::{Error, Result};

/// Application directory name under the platform config dir
const APP_DIR: &str = "groupie-tracker";

/// Bootstrap configuration loaded from TOML
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct TomlConfig {
    /// Interface to bind
    pub host: String,

    /// HTTP server port
    pub port: u16,

    /// Base URL of the remote artist API (endpoint paths are appended)
    pub api_base_url: String,

    /// Directory holding the page templates
    pub templates_dir: PathBuf,

    /// Directory served under `/static/`
    pub static_dir: PathBuf,

    /// Upstream request timeout in seconds
    ///
    /// Unset by default: a hanging upstream blocks that request indefinitely.
    pub upstream_timeout_secs: Option<u64>,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
}

impl Default for TomlConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            templates_dir: PathBuf::from("templates"),
            static_dir: PathBuf::from("static"),
            upstream_timeout_secs: None,
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl TomlConfig {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: TomlConfig = toml::from_str(content)
            .map_err(|e| Error::Config(format!("Parse TOML failed: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Read {} failed: {}", path.display(), e)))?;
        let config = Self::from_toml_str(&content)?;
        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Resolve configuration from an explicit path, the per-user default
    /// location, or built-in defaults (in that order)
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        match default_config_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => {
                debug!("No config file found, using built-in defaults");
                Ok(Self::default())
            }
        }
    }

    fn validate(&self) -> Result<()> {
        let base = self.api_base_url.trim();
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(Error::Config(format!(
                "api_base_url must be an http(s) URL, got {:?}",
                self.api_base_url
            )));
        }
        if self.upstream_timeout_secs == Some(0) {
            return Err(Error::Config(
                "upstream_timeout_secs must be positive when set".to_string(),
            ));
        }
        Ok(())
    }
}

/// Per-user config file location (`<config dir>/groupie-tracker/config.toml`)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(APP_DIR).join("config.toml"))
}
