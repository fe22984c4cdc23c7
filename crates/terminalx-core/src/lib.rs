//! Core of the TerminalX simulated terminal.
//!
//! This crate has no rendering dependency. It provides:
//! - [`VirtualFs`] in-memory file system with copy-on-write mutation
//! - [`resolve`] lexical path resolution
//! - [`execute`] command parsing and dispatch
//! - [`TerminalSession`] working directory, scrollback and recall state
//!
//! Front ends feed lines into [`TerminalSession::submit`] and render the
//! [`Output`] values found in [`TerminalSession::history`].

pub mod commands;
pub mod config;
pub mod error;
pub mod filesystem;
pub mod models;
pub mod resolver;
pub mod session;
pub mod sysinfo;

pub use commands::{Command, ExecContext, execute};
pub use config::SessionConfig;
pub use error::{SeedError, VfsError};
pub use filesystem::VirtualFs;
pub use models::{DirEntry, HistoryEntry, Node, Output, VirtualPath};
pub use resolver::resolve;
pub use session::{Recall, TerminalSession};
