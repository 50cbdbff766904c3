//! UI Module for the DeepThought app
//!
//! This module contains the theme, the reusable components and the
//! sign-in view.

pub mod components;
pub mod theme;
pub mod views;

pub use theme::create_deepthought_theme;
