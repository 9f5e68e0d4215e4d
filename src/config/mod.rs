use crate::autocomplete::{ControllerOptions, DEFAULT_BLUR_DELAY_MS, DEFAULT_DEBOUNCE_MS};
use crate::backends::AVAILABLE_BACKENDS;
use crate::backends::http::DEFAULT_BASE_URL;
use crate::console::VerbosityLevel;
use crate::suggestion::DEFAULT_LIMIT;
use anyhow::{Context, Result};
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path, path::PathBuf, time::Duration};

pub mod error;

pub use error::{ConfigError, ConfigResult};

pub const CONFIG_KEYS: &[&str] = &[
    "backend",
    "base_url",
    "debounce_ms",
    "blur_delay_ms",
    "limit",
    "category",
    "request_timeout_secs",
    "verbosity",
    "log_file",
];

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct AppConfig {
    #[serde(default = "default_backend")]
    pub backend: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    #[serde(default = "default_blur_delay_ms")]
    pub blur_delay_ms: u64,
    #[serde(default = "default_limit")]
    pub limit: usize,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    #[serde(default)]
    pub verbosity: Option<String>,
    /// Console lines go here instead of the terminal when set.
    #[serde(default)]
    pub log_file: Option<PathBuf>,
}

fn default_backend() -> String {
    "http".to_string()
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_debounce_ms() -> u64 {
    DEFAULT_DEBOUNCE_MS
}

fn default_blur_delay_ms() -> u64 {
    DEFAULT_BLUR_DELAY_MS
}

fn default_limit() -> usize {
    DEFAULT_LIMIT
}

fn default_request_timeout_secs() -> u64 {
    10
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            base_url: default_base_url(),
            debounce_ms: default_debounce_ms(),
            blur_delay_ms: default_blur_delay_ms(),
            limit: default_limit(),
            category: None,
            request_timeout_secs: default_request_timeout_secs(),
            verbosity: None,
            log_file: None,
        }
    }
}

impl AppConfig {
    /// Loads the user config, writing a default file on first run.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;
        let config = if config_path.exists() {
            Self::load_from(&config_path)
                .with_context(|| format!("Failed to load {}", config_path.display()))?
        } else {
            let config = Self::default();
            config.save()?;
            config
        };

        Ok(config)
    }

    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;
        self.save_to(&config_path)
            .with_context(|| format!("Failed to write {}", config_path.display()))
    }

    pub fn save_to(&self, path: &Path) -> ConfigResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::SerializationError(e.to_string()))?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if !AVAILABLE_BACKENDS.contains(&self.backend.as_str()) {
            return Err(invalid("backend", &self.backend));
        }
        if self.limit == 0 {
            return Err(invalid("limit", "0"));
        }
        if Url::parse(&self.base_url).is_err() {
            return Err(invalid("base_url", &self.base_url));
        }
        Ok(())
    }

    /// Applies one `config set` assignment. Values are checked before they are stored.
    pub fn update_setting(&mut self, key: &str, value: String) -> ConfigResult<()> {
        match key {
            "backend" => {
                if !AVAILABLE_BACKENDS.contains(&value.as_str()) {
                    return Err(invalid(key, &value));
                }
                self.backend = value;
            }
            "base_url" => {
                Url::parse(&value).map_err(|_| invalid(key, &value))?;
                self.base_url = value;
            }
            "debounce_ms" => self.debounce_ms = parse_number(key, &value)?,
            "blur_delay_ms" => self.blur_delay_ms = parse_number(key, &value)?,
            "limit" => {
                let limit: usize = parse_number(key, &value)?;
                if limit == 0 {
                    return Err(invalid(key, &value));
                }
                self.limit = limit;
            }
            "category" => self.category = non_blank(value),
            "request_timeout_secs" => self.request_timeout_secs = parse_number(key, &value)?,
            "verbosity" => {
                let level = VerbosityLevel::parse(&value).ok_or_else(|| invalid(key, &value))?;
                self.set_verbosity(level);
            }
            "log_file" => self.log_file = non_blank(value).map(PathBuf::from),
            _ => {
                return Err(ConfigError::UnknownConfigKey {
                    key: key.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Get the configured verbosity level, falling back to Normal if not set
    pub fn get_verbosity(&self) -> VerbosityLevel {
        self.verbosity
            .as_deref()
            .and_then(VerbosityLevel::parse)
            .unwrap_or(VerbosityLevel::Normal)
    }

    pub fn set_verbosity(&mut self, verbosity: VerbosityLevel) {
        self.verbosity = Some(verbosity.to_string());
    }

    pub fn controller_options(&self) -> ControllerOptions {
        ControllerOptions {
            debounce: Duration::from_millis(self.debounce_ms),
            blur_delay: Duration::from_millis(self.blur_delay_ms),
            limit: self.limit,
            category: self.category.clone(),
        }
    }

    pub fn config_path() -> ConfigResult<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::NoHomeDirectory)?;
        Ok(home.join(".config").join("typeahead").join("config.toml"))
    }
}

fn invalid(field: &str, value: &str) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
    }
}

fn parse_number<T: std::str::FromStr>(field: &str, value: &str) -> ConfigResult<T> {
    value.trim().parse().map_err(|_| invalid(field, value))
}

fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
