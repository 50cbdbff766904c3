//! Configuration management for DeepThought
//!
//! Loads and saves the YAML application configuration. A missing file is not
//! an error: defaults are used and the file is only created on `save`.

pub mod app_config;

pub use app_config::*;

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::error::{ConfigError, ConfigResult};

/// Directory name used under the platform config directory
pub const APP_DIR_NAME: &str = "deepthought";

/// Configuration file name
pub const CONFIG_FILE_NAME: &str = "config.yml";

/// Configuration manager for desktop applications
#[derive(Debug)]
pub struct ConfigManager {
    config_path: PathBuf,
    app_config: AppConfig,
    loaded_from_file: bool,
}

impl ConfigManager {
    /// Create a new configuration manager for the given file path
    pub fn new(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
            app_config: AppConfig::default(),
            loaded_from_file: false,
        }
    }

    /// Create a configuration manager for the platform default location
    pub fn with_default_path() -> Self {
        Self::new(default_config_path())
    }

    /// Load configuration from file
    ///
    /// If the configuration file doesn't exist, uses default configuration.
    /// This method is safe to call multiple times.
    pub fn load(&mut self) -> ConfigResult<()> {
        if !self.config_path.exists() {
            debug!(
                "No configuration file at {:?}, using defaults",
                self.config_path
            );
            self.app_config = AppConfig::default();
            self.loaded_from_file = false;
            return Ok(());
        }

        let content = fs::read_to_string(&self.config_path).map_err(|source| ConfigError::Io {
            path: self.config_path.clone(),
            source,
        })?;

        self.app_config = serde_yaml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: self.config_path.clone(),
            source,
        })?;
        self.loaded_from_file = true;

        for problem in ConfigValidator::repair_app_config(&mut self.app_config) {
            warn!("{} in {:?}; using the default", problem, self.config_path);
        }

        debug!("Configuration loaded from {:?}", self.config_path);
        Ok(())
    }

    /// Save configuration to file, creating parent directories as needed
    pub fn save(&self) -> ConfigResult<()> {
        let yaml = serde_yaml::to_string(&self.app_config)?;

        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).map_err(|source| ConfigError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        fs::write(&self.config_path, yaml).map_err(|source| ConfigError::Io {
            path: self.config_path.clone(),
            source,
        })?;

        debug!("Configuration saved to {:?}", self.config_path);
        Ok(())
    }

    /// Get immutable reference to configuration
    pub fn config(&self) -> &AppConfig {
        &self.app_config
    }

    /// Get mutable reference to configuration
    pub fn config_mut(&mut self) -> &mut AppConfig {
        &mut self.app_config
    }

    /// Whether the last `load` read an existing file
    pub fn is_loaded_from_file(&self) -> bool {
        self.loaded_from_file
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }
}

/// Default configuration file location for the current platform
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| dirs::home_dir().unwrap_or_default().join(".config"))
        .join(APP_DIR_NAME)
        .join(CONFIG_FILE_NAME)
}

/// Range checks for values that reach the renderer
pub struct ConfigValidator;

impl ConfigValidator {
    pub const FONT_SIZE_RANGE: std::ops::RangeInclusive<f32> = 8.0..=72.0;
    pub const WINDOW_SIDE_RANGE: std::ops::RangeInclusive<u32> = 200..=16384;

    /// Describe every out-of-range value without changing anything
    pub fn validate_app_config(config: &AppConfig) -> Vec<String> {
        Self::repair_app_config(&mut config.clone())
    }

    /// Reset out-of-range values to their defaults, describing each reset
    pub fn repair_app_config(config: &mut AppConfig) -> Vec<String> {
        let mut problems = Vec::new();
        let defaults = UiConfig::default();
        let ui = &mut config.ui;

        if !Self::FONT_SIZE_RANGE.contains(&ui.font_size) {
            problems.push(format!("Font size {} is out of range", ui.font_size));
            ui.font_size = defaults.font_size;
        }

        if !Self::WINDOW_SIDE_RANGE.contains(&ui.window_width) {
            problems.push(format!("Window width {} is out of range", ui.window_width));
            ui.window_width = defaults.window_width;
        }

        if !Self::WINDOW_SIDE_RANGE.contains(&ui.window_height) {
            problems.push(format!("Window height {} is out of range", ui.window_height));
            ui.window_height = defaults.window_height;
        }

        if let Err(e) = ui.accent() {
            problems.push(e.to_string());
            ui.accent_color = defaults.accent_color;
        }

        problems
    }
}
