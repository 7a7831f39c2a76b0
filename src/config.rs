//! Configuration management for rentscout
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{
    CALENDAR_DEFAULT_WIDTH, CALENDAR_MAX_WIDTH, CALENDAR_MIN_WIDTH, CONFIG_GENERATED,
    DEFAULT_HIGHLIGHT_COLOR, DEFAULT_HIGHLIGHT_TEXT_COLOR,
};
use crate::utils::datetime;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// First day of the calendar week
    /// Options: "monday" through "sunday"
    pub week_start: String,
    /// Enable mouse support
    pub mouse_enabled: bool,
    /// Calendar pane width in columns
    pub calendar_width: u16,
}

/// Display configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Date format for the selected-range summary line
    pub date_format: String,
    /// Show the "Selected: start → end" line under the calendar
    pub show_range_summary: bool,
    /// Fill color for range boundary days
    pub highlight_color: String,
    /// Text color for range boundary days
    pub highlight_text_color: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable file logging
    pub enabled: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            week_start: "monday".to_string(),
            mouse_enabled: true,
            calendar_width: CALENDAR_DEFAULT_WIDTH,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            date_format: datetime::DATE_FORMAT.to_string(),
            show_range_summary: true,
            highlight_color: DEFAULT_HIGHLIGHT_COLOR.to_string(),
            highlight_text_color: DEFAULT_HIGHLIGHT_TEXT_COLOR.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from("rentscout.toml");
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("rentscout").join("config.toml");
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        // Validate UI settings
        if self.ui.calendar_width < CALENDAR_MIN_WIDTH || self.ui.calendar_width > CALENDAR_MAX_WIDTH {
            anyhow::bail!(
                "calendar_width must be between {} and {} columns, got {}",
                CALENDAR_MIN_WIDTH,
                CALENDAR_MAX_WIDTH,
                self.ui.calendar_width
            );
        }

        if datetime::parse_week_start(&self.ui.week_start).is_none() {
            anyhow::bail!(
                "week_start must name a weekday (monday..sunday), got '{}'",
                self.ui.week_start
            );
        }

        // Reject format strings chrono cannot render
        let mut items = chrono::format::StrftimeItems::new(&self.display.date_format);
        if items.any(|item| matches!(item, chrono::format::Item::Error)) {
            anyhow::bail!("Invalid date_format '{}'", self.display.date_format);
        }

        if self.display.highlight_color.is_empty() {
            anyhow::bail!("highlight_color cannot be empty");
        }
        if self.display.highlight_text_color.is_empty() {
            anyhow::bail!("highlight_text_color cannot be empty");
        }

        Ok(())
    }

    /// The configured week start as a chrono weekday
    pub fn week_start(&self) -> chrono::Weekday {
        datetime::parse_week_start(&self.ui.week_start).unwrap_or(chrono::Weekday::Mon)
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        // Add header comment
        let header = format!(
            "# Rentscout Configuration File\n# Generated on {}\n\n",
            chrono::Local::now().format(datetime::DATE_FORMAT)
        );

        let full_content = header + &toml_content;

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        println!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join("rentscout"))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}
