//! Configuration management for the DeepThought desktop app
//!
//! This module provides a thin wrapper around the shared configuration
//! manager, adding the conversions the Iced frontend needs.

use anyhow::{Context, Result};
use iced::{Color, Size};
use std::path::PathBuf;
use tracing::{debug, info, warn};

use deepthought_shared::config::{AppConfig, ConfigManager as SharedConfigManager, UiConfig};

use crate::ui::theme::{self, DEFAULT_ACCENT};

/// Desktop configuration manager
pub struct ConfigManager {
    shared_manager: SharedConfigManager,
}

impl ConfigManager {
    /// Create a configuration manager for `path`, or the platform default
    pub fn new(path: Option<PathBuf>) -> Self {
        let shared_manager = match path {
            Some(path) => SharedConfigManager::new(path),
            None => SharedConfigManager::with_default_path(),
        };

        debug!("Config file path: {:?}", shared_manager.config_path());
        Self { shared_manager }
    }

    /// Load configuration from file
    pub fn load(&mut self) -> Result<()> {
        self.shared_manager.load().with_context(|| {
            format!(
                "Failed to load config from {:?}",
                self.shared_manager.config_path()
            )
        })?;

        if self.shared_manager.is_loaded_from_file() {
            info!(
                "Configuration loaded from {:?}",
                self.shared_manager.config_path()
            );
        }
        Ok(())
    }

    /// Get the current configuration
    pub fn config(&self) -> &AppConfig {
        self.shared_manager.config()
    }

    /// Load the configuration, falling back to defaults when the file is
    /// unreadable or malformed
    pub fn load_or_default(path: Option<PathBuf>) -> AppConfig {
        let mut manager = Self::new(path);
        match manager.load() {
            Ok(()) => manager.config().clone(),
            Err(e) => {
                warn!("{:#}. Using default configuration.", e);
                AppConfig::default()
            }
        }
    }
}

/// Initial window size from the UI configuration
pub fn window_size(ui: &UiConfig) -> Size {
    Size::new(ui.window_width as f32, ui.window_height as f32)
}

/// Accent color from the UI configuration, or the default if it is invalid
pub fn accent_color(ui: &UiConfig) -> Color {
    match ui.accent() {
        Ok(rgb) => theme::color_from_rgb(rgb),
        Err(e) => {
            warn!("{}. Using default accent color.", e);
            DEFAULT_ACCENT
        }
    }
}
