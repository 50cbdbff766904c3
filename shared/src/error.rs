//! Error types for the DeepThought shared library
//!
//! The sign-in screen itself has no failing operations. The errors here cover
//! the ambient configuration layer only.

use std::path::PathBuf;
use thiserror::Error;

/// Configuration-related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to access configuration file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration parsing failed for {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Configuration serialization failed: {0}")]
    Serialize(#[from] serde_yaml::Error),

    #[error("Invalid color value: {0:?} (expected #RRGGBB)")]
    InvalidColor(String),
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;
