//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

use crate::constants::{CONFIG_DIR_ENV, CONFIG_DIR_NAME};

/// Theme display mode preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ThemeMode {
    /// Automatically detect OS theme (dark/light)
    #[default]
    Auto,
    /// Always use dark theme
    Dark,
    /// Always use light theme
    Light,
}

impl FromStr for ThemeMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            _ => anyhow::bail!("Invalid theme mode '{s}'. Must be 'auto', 'light', or 'dark'"),
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Auto => "auto",
            Self::Dark => "dark",
            Self::Light => "light",
        })
    }
}

/// Display language for element names and messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English
    #[default]
    En,
    /// Persian
    Fa,
}

impl Language {
    /// ISO 639-1 code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Fa => "fa",
        }
    }
}

impl FromStr for Language {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "en" => Ok(Self::En),
            "fa" => Ok(Self::Fa),
            _ => anyhow::bail!("Unsupported language '{s}'. Must be 'en' or 'fa'"),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Path configuration for file system locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PathConfig {
    /// Directory holding `elements.json` and `aliases.json`.
    /// The embedded data set is used when unset.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

/// UI preferences configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Display help on startup
    #[serde(default)]
    pub show_help_on_startup: bool,
    /// Theme mode preference (Auto, Dark, Light)
    #[serde(default)]
    pub theme_mode: ThemeMode,
    /// Language for names and messages
    #[serde(default)]
    pub language: Language,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_help_on_startup: false,
            theme_mode: ThemeMode::default(),
            language: Language::default(),
        }
    }
}

/// Web API server settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address
    #[serde(default = "default_host")]
    pub host: String,
    /// Listen port
    #[serde(default = "default_port")]
    pub port: u16,
    /// Allow cross-origin requests from any origin
    #[serde(default = "default_cors_enabled")]
    pub cors_enabled: bool,
    /// Directory of static files served for unknown routes
    #[serde(default)]
    pub static_dir: Option<PathBuf>,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

const fn default_port() -> u16 {
    3001
}

const fn default_cors_enabled() -> bool {
    true
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_enabled: default_cors_enabled(),
            static_dir: None,
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/Mendeleev/config.toml`
/// - macOS: `~/Library/Application Support/Mendeleev/config.toml`
/// - Windows: `%APPDATA%\Mendeleev\config.toml`
///
/// `MENDELEEV_CONFIG_DIR` replaces the directory on every platform.
///
/// # Validation
///
/// - `data_dir` must exist and be a directory when set
/// - `port` must be non-zero
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// File system paths
    #[serde(default)]
    pub paths: PathConfig,
    /// UI preferences
    #[serde(default)]
    pub ui: UiConfig,
    /// Web API settings
    #[serde(default)]
    pub server: ServerConfig,
}

impl Config {
    /// Keys accepted by [`Config::set_value`].
    pub const KEYS: &'static [&'static str] = &[
        "paths.data_dir",
        "ui.theme_mode",
        "ui.language",
        "ui.show_help_on_startup",
        "server.host",
        "server.port",
        "server.cors_enabled",
        "server.static_dir",
    ];

    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the config directory path.
    ///
    /// - Linux: `~/.config/Mendeleev/`
    /// - macOS: `~/Library/Application Support/Mendeleev/`
    /// - Windows: `%APPDATA%\Mendeleev\`
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
            if !dir.is_empty() {
                return Ok(PathBuf::from(dir));
            }
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(CONFIG_DIR_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        if !config_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(&config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config: Self = toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save(&self) -> Result<()> {
        self.validate()?;

        let config_dir = Self::config_dir()?;
        fs::create_dir_all(&config_dir).context(format!(
            "Failed to create config directory: {}",
            config_dir.display()
        ))?;

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let config_path = Self::config_file_path()?;
        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, &config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        Ok(())
    }

    /// Validates configuration values.
    pub fn validate(&self) -> Result<()> {
        if let Some(data_dir) = &self.paths.data_dir {
            if !data_dir.is_dir() {
                anyhow::bail!("Data directory does not exist: {}", data_dir.display());
            }
        }

        if let Some(static_dir) = &self.server.static_dir {
            if !static_dir.is_dir() {
                anyhow::bail!("Static directory does not exist: {}", static_dir.display());
            }
        }

        if self.server.port == 0 {
            anyhow::bail!("Server port must be non-zero");
        }

        Ok(())
    }

    /// Sets a single value by dotted key, e.g. `ui.language`.
    ///
    /// An empty value clears optional paths. The result is validated.
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<()> {
        let optional_path = |v: &str| (!v.is_empty()).then(|| PathBuf::from(v));

        match key {
            "paths.data_dir" => self.paths.data_dir = optional_path(value),
            "ui.theme_mode" => self.ui.theme_mode = value.parse()?,
            "ui.language" => self.ui.language = value.parse()?,
            "ui.show_help_on_startup" => {
                self.ui.show_help_on_startup = parse_bool(value)?;
            }
            "server.host" => {
                if value.trim().is_empty() {
                    anyhow::bail!("Server host must not be empty");
                }
                self.server.host = value.trim().to_string();
            }
            "server.port" => {
                self.server.port = value
                    .parse()
                    .with_context(|| format!("Invalid port '{value}'"))?;
            }
            "server.cors_enabled" => self.server.cors_enabled = parse_bool(value)?,
            "server.static_dir" => self.server.static_dir = optional_path(value),
            _ => anyhow::bail!(
                "Unknown configuration key '{key}'. Valid keys: {}",
                Self::KEYS.join(", ")
            ),
        }

        self.validate()
    }
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => anyhow::bail!("Expected a boolean value, got '{value}'"),
    }
}
