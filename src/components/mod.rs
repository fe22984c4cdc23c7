//! UI components built with Leptos.
//!
//! - [`icons`] - Icon definitions
//! - [`terminal`] - Terminal window, scrollback and input

pub mod icons;
pub mod terminal;

pub use terminal::Shell;
