//! UI Views Module
//!
//! Views represent complete screens.

pub mod login;

pub use login::{LoginMessage, LoginView};
