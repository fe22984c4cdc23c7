//! Native front end for the TerminalX simulated terminal.
//!
//! - [`config`] - TOML configuration and seed loading
//! - [`render`] - Plain-text and JSON-lines rendering of scrollback entries
//! - [`repl`] - Line-oriented driver over any reader and writer

pub mod config;
pub mod render;
pub mod repl;

pub use config::{CliConfig, ConfigError};
pub use render::Format;
pub use repl::Repl;
