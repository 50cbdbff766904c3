//! UI Components Module
//!
//! Reusable pieces of the sign-in screen.

pub mod button;
pub mod login_form;
pub mod provider_button;
pub mod provider_list;

// Re-export components that are used by the views
pub use login_form::{LoginForm, LoginFormMessage};
pub use provider_list::ProviderButtonList;
