//! Shared data models for DeepThought
//!
//! This module contains the data behind the sign-in screen: the two text
//! values typed by the user, the fixed provider catalog, per-field input
//! hints and the two-state press feedback used by the primary button.

pub mod credentials;
pub mod input;
pub mod provider;

pub use credentials::*;
pub use input::*;
pub use provider::*;
