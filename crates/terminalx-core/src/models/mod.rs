//! Data models shared by the core and its front ends.
//!
//! - [`Node`], [`DirEntry`] - Virtual file system representation
//! - [`VirtualPath`] - Canonical segment paths
//! - [`Output`], [`HistoryEntry`] - Renderable terminal output

mod filesystem;
mod path;
mod terminal;

pub use filesystem::{Children, DirEntry, Node, is_valid_name};
pub use path::VirtualPath;
pub use terminal::{HelpEntry, HistoryEntry, Output, ProcessInfo};
