//! DeepThought Shared Library
//!
//! This crate contains the UI-agnostic pieces of the DeepThought sign-in
//! screen: the credentials typed by the user, the fixed catalog of
//! "continue with" providers, input hints, button press state, and the
//! application configuration. Frontends render these; nothing here talks to
//! the network or performs authentication.
//!
//! # Usage
//!
//! ```rust
//! use deepthought_shared::models::{provider_catalog, LoginCredentials, ProviderKind};
//!
//! let mut credentials = LoginCredentials::new();
//! credentials.set_email("a@b.com".to_string());
//! credentials.set_password("secret1".to_string());
//!
//! assert_eq!(credentials.email(), "a@b.com");
//! assert_eq!(credentials.masked_password().chars().count(), 7);
//!
//! let catalog = provider_catalog();
//! assert_eq!(catalog.len(), 7);
//! assert_eq!(catalog[0].kind, ProviderKind::Google);
//! ```

pub mod config;
pub mod error;
pub mod models;

// Re-export commonly used types for convenience
pub use models::{
    provider_catalog, FieldKind, IconRef, InputHints, KeyboardKind, LoginCredentials, PressState,
    ProviderEntry, ProviderKind, RenderMode, TextContentType,
};

// Re-export config functionality
pub use config::{AppConfig, ConfigManager, ConfigValidator, Rgb, UiConfig};

pub use error::{ConfigError, ConfigResult};
