//! Application configuration
//!
//! Configuration is loaded in order of precedence:
//! 1. Environment variables (highest priority)
//! 2. Config file (~/.config/calendar-events/config.toml)
//! 3. Built-in defaults (lowest priority)

use crate::schedule::ScheduleOptions;
use crate::tui::feedback::DEFAULT_FEEDBACK_DELAY;
use crate::tui::theme::ThemeKind;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

// ─────────────────────────────────────────────────────────────────────────────
// Submodules
// ─────────────────────────────────────────────────────────────────────────────

mod observability;
mod schedule;
mod serialization;

#[cfg(test)]
mod tests;

pub use observability::{LogRotation, LoggingConfig};
pub use schedule::FileSchedule;

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Directory name under ~/.config
const APP_DIR: &str = "calendar-events";

const DEFAULT_FEEDBACK_MS: u64 = DEFAULT_FEEDBACK_DELAY.as_millis() as u64;

// ─────────────────────────────────────────────────────────────────────────────
// Application Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Theme name: "dark" or "light"
    pub theme: String,

    /// How long the copy button says "Copied!" (milliseconds)
    pub feedback_ms: u64,

    /// Defaults for the `parse` command
    pub schedule: ScheduleOptions,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            feedback_ms: DEFAULT_FEEDBACK_MS,
            schedule: ScheduleOptions::default(),
            logging: LoggingConfig::default(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// File Configuration (deserialization layer)
// ─────────────────────────────────────────────────────────────────────────────

/// Config file structure; every key is optional
#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileConfig {
    pub theme: Option<String>,
    pub feedback_ms: Option<u64>,

    /// Optional [schedule] section
    pub schedule: Option<FileSchedule>,

    /// Optional [logging] section
    pub logging: Option<LoggingConfig>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration Loading
// ─────────────────────────────────────────────────────────────────────────────

impl Config {
    /// Get the config file path: ~/.config/calendar-events/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join(APP_DIR).join("config.toml"))
    }

    /// Create config file with defaults if it doesn't exist
    /// Called during startup to help users discover configuration options
    ///
    /// Runs before logging is set up, so the outcome is returned for the
    /// caller to log: `Ok(Some(path))` when a template was written.
    pub fn ensure_config_exists() -> Result<Option<PathBuf>> {
        let Some(path) = Self::config_path() else {
            return Ok(None);
        };
        Ok(Self::create_template_if_missing(&path)?.then_some(path))
    }

    /// Write the template unless something is already at `path`
    pub(crate) fn create_template_if_missing(path: &std::path::Path) -> Result<bool> {
        // Don't overwrite existing config
        if path.exists() {
            return Ok(false);
        }
        Self::write_template(path)?;
        Ok(true)
    }

    /// Write the default template, replacing whatever is at `path`
    pub fn write_template(path: &std::path::Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        // Config::default().to_toml() is the single source of truth for the format
        std::fs::write(path, Self::default().to_toml())
            .with_context(|| format!("Failed to write {}", path.display()))
    }

    /// Load file config if it exists
    ///
    /// A missing file means defaults. A file that exists but cannot be read
    /// or parsed is an error: silently falling back would leave the user
    /// debugging the wrong thing.
    fn load_file_config() -> Result<FileConfig> {
        let Some(path) = Self::config_path() else {
            return Ok(FileConfig::default());
        };

        match std::fs::read_to_string(&path) {
            Ok(contents) => Self::parse_file_config(&contents)
                .with_context(|| format!("Failed to parse config file {}", path.display())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(FileConfig::default()),
            Err(e) => Err(e).with_context(|| format!("Cannot read config file {}", path.display())),
        }
    }

    pub(crate) fn parse_file_config(contents: &str) -> Result<FileConfig> {
        Ok(toml::from_str(contents)?)
    }

    /// Load configuration: env vars > file > defaults
    pub fn from_env() -> Result<Self> {
        let file = Self::load_file_config()?;
        Ok(Self::from_sources(file, |key| std::env::var(key).ok()))
    }

    /// Merge a parsed file with an environment lookup
    pub(crate) fn from_sources(file: FileConfig, env: impl Fn(&str) -> Option<String>) -> Self {
        // Theme: env > file > default
        let theme = env("CALENDAR_EVENTS_THEME")
            .or(file.theme)
            .unwrap_or_else(|| "dark".to_string());

        // Feedback delay: env > file > default (unparseable env values are ignored)
        let feedback_ms = env("CALENDAR_EVENTS_FEEDBACK_MS")
            .and_then(|v| v.parse().ok())
            .or(file.feedback_ms)
            .unwrap_or(DEFAULT_FEEDBACK_MS);

        Self {
            theme,
            feedback_ms,
            schedule: ScheduleOptions::from_file(file.schedule),
            logging: file.logging.unwrap_or_default(),
        }
    }

    pub fn feedback_delay(&self) -> Duration {
        Duration::from_millis(self.feedback_ms)
    }

    pub fn theme_kind(&self) -> ThemeKind {
        ThemeKind::from_name(&self.theme)
    }
}
