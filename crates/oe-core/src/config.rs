//! Configuration system for the oxidized-emotion frontend

use oe_text::{Rect, Size};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::paths::{FileNames, PathConfig, APP_DIR_NAME};

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub paths: PathConfig,
    pub gui: GuiConfig,
    pub debug: DebugConfig,
}

/// Remembered window geometry, stored as `"x,y,w,h"` text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuiConfig {
    pub main_window: Rect,
    pub console_window: Rect,
    pub show_console: bool,
    pub toolbar_icon_size: Size,
}

/// Debug settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    pub log_level: LogLevel,
    pub log_to_file: bool,
    pub log_path: PathBuf,
}

/// Logging level
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Directive understood by `tracing_subscriber::EnvFilter`
    pub fn as_filter(self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

impl Default for GuiConfig {
    fn default() -> Self {
        Self {
            main_window: Rect::from_xywh(64, 64, 640, 480),
            console_window: Rect::from_xywh(720, 64, 540, 480),
            show_console: false,
            toolbar_icon_size: Size::new(32, 32),
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::default(),
            log_to_file: false,
            log_path: PathBuf::from("oxidized-emotion.log"),
        }
    }
}

impl Config {
    /// Load configuration from the default location, writing defaults if it doesn't exist
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Save configuration to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    /// Load configuration from `path`, writing defaults if it doesn't exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Ok(toml::from_str(&content)?)
        } else {
            tracing::info!("No config at {}, writing defaults", path.display());
            let config = Self::default();
            config.save_to(path)?;
            Ok(config)
        }
    }

    /// Save configuration to `path`
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get the path to the configuration file
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR_NAME)
            .join(FileNames::ui_config())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.gui.toolbar_icon_size, Size::new(32, 32));
        assert_eq!(config.debug.log_level, LogLevel::Info);
        assert!(!config.debug.log_to_file);
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("main_window = \"64,64,640,480\""));
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let parsed: Config = toml::from_str("[gui]\nmain_window = \"1,2,3,4\"\n").unwrap();
        assert_eq!(parsed.gui.main_window, Rect::from_xywh(1, 2, 3, 4));
        assert_eq!(parsed.gui.console_window, GuiConfig::default().console_window);
        assert_eq!(parsed.debug, DebugConfig::default());
    }

    #[test]
    fn test_bad_geometry_is_config_error() {
        let result: std::result::Result<Config, _> =
            toml::from_str("[gui]\nmain_window = \"1,2\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_writes_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("ui.toml");

        let config = Config::load_from(&path).unwrap();
        assert!(path.exists());
        assert_eq!(config, Config::default());

        let mut changed = config.clone();
        changed.gui.show_console = true;
        changed.save_to(&path).unwrap();
        assert!(Config::load_from(&path).unwrap().gui.show_console);
    }
}
