//! Error types for the core.
//!
//! - [`VfsError`] - File system lookups and mutations
//! - [`SeedError`] - Building a file system from a seed document
//!
//! Neither reaches the user directly: the command interpreter turns
//! [`VfsError`] into the terminal's error strings, and front ends report
//! [`SeedError`] at startup.

use thiserror::Error;

/// File-system operation failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VfsError {
    /// Path or entry does not exist
    #[error("no such file or directory: {0}")]
    NotFound(String),
    /// A directory was required
    #[error("not a directory: {0}")]
    NotADirectory(String),
    /// A file was required
    #[error("is a directory: {0}")]
    IsADirectory(String),
    /// Entry name already present in the parent
    #[error("file exists: {0}")]
    AlreadyExists(String),
    /// Directory still has children
    #[error("directory not empty: {0}")]
    NotEmpty(String),
    /// Name is empty, contains `/`, or is `.`/`..`
    #[error("invalid name: {0:?}")]
    InvalidName(String),
}

/// Seed document failures.
#[derive(Debug, Error)]
pub enum SeedError {
    /// The document is not valid JSON for a file tree
    #[error("invalid seed document: {0}")]
    Parse(#[from] serde_json::Error),
    /// The document parsed, but its root is a file
    #[error("seed root must be a directory")]
    RootNotDirectory,
    /// A name in the document cannot be used as an entry name
    #[error("invalid entry name in seed: {0:?}")]
    InvalidName(String),
}
