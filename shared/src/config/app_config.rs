//! Application configuration for DeepThought
//!
//! Only presentation settings live here. Credentials are never written to the
//! configuration file.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// Main application configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// User interface configuration
    pub ui: UiConfig,
}

/// Background appearance of the screen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Appearance {
    #[default]
    Light,
    Dark,
}

/// User interface configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Background appearance ("light", "dark")
    pub appearance: Appearance,

    /// Window width in logical pixels
    pub window_width: u32,

    /// Window height in logical pixels
    pub window_height: u32,

    /// Base font size for labels and inputs
    pub font_size: f32,

    /// Fill color of the primary button, as `#RRGGBB`
    pub accent_color: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            appearance: Appearance::Light,
            // Phone-sized window
            window_width: 390,
            window_height: 844,
            font_size: 16.0,
            accent_color: "#007AFF".to_string(),
        }
    }
}

impl UiConfig {
    /// Parsed accent color
    pub fn accent(&self) -> ConfigResult<Rgb> {
        Rgb::from_hex(&self.accent_color)
    }
}

/// An opaque sRGB color with 8-bit channels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RRGGBB` or `RRGGBB`
    pub fn from_hex(value: &str) -> ConfigResult<Self> {
        let invalid = || ConfigError::InvalidColor(value.to_string());

        let hex = value.trim().strip_prefix('#').unwrap_or(value.trim());
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());

        Ok(Self {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.ui.window_width, 390);
        assert_eq!(config.ui.window_height, 844);
        assert_eq!(config.ui.appearance, Appearance::Light);
        assert_eq!(config.ui.accent().unwrap(), Rgb::new(0x00, 0x7A, 0xFF));
    }

    #[test]
    fn test_hex_parsing() {
        assert_eq!(Rgb::from_hex("#202124").unwrap(), Rgb::new(0x20, 0x21, 0x24));
        assert_eq!(Rgb::from_hex("ff8000").unwrap(), Rgb::new(255, 128, 0));
        assert_eq!(Rgb::from_hex(" #AbCdEf ").unwrap(), Rgb::new(0xAB, 0xCD, 0xEF));
    }

    #[test]
    fn test_invalid_hex() {
        assert_matches!(Rgb::from_hex("#12345"), Err(ConfigError::InvalidColor(_)));
        assert_matches!(Rgb::from_hex("#GGGGGG"), Err(ConfigError::InvalidColor(_)));
        assert_matches!(Rgb::from_hex(""), Err(ConfigError::InvalidColor(_)));
        assert_matches!(Rgb::from_hex("#ÿÿÿ"), Err(ConfigError::InvalidColor(_)));
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let config: AppConfig = serde_yaml::from_str("ui:\n  appearance: dark\n").unwrap();
        assert_eq!(config.ui.appearance, Appearance::Dark);
        assert_eq!(config.ui.window_width, 390);
        assert_eq!(config.ui.accent_color, "#007AFF");
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let config: AppConfig =
            serde_yaml::from_str("ui:\n  font_size: 18.0\n  sparkles: true\nextra: 1\n").unwrap();
        assert_eq!(config.ui.font_size, 18.0);
    }
}
