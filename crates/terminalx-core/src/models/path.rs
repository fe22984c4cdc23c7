//! Segment-based paths into the virtual file system.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A canonical path from the root of the virtual file system.
///
/// Stored as an ordered list of segments with no `.`, `..` or empty entries.
/// The empty path is the root directory.
///
/// # Conventions
///
/// - Root: `[]`, displayed as `/`
/// - Home: `["home", "user"]`, displayed as `/home/user`
/// - Serialized as the relative form (`"home/user"`)
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct VirtualPath(Vec<String>);

impl VirtualPath {
    /// The root directory.
    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// Build a path from a slash-separated string, ignoring empty segments.
    ///
    /// No `.`/`..` handling happens here; use the resolver for user input.
    pub fn parse(path: &str) -> Self {
        Self(
            path.split('/')
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
        )
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Append a segment.
    pub fn push(&mut self, segment: impl Into<String>) {
        self.0.push(segment.into());
    }

    /// Remove the last segment. No-op at root.
    pub fn pop(&mut self) -> Option<String> {
        self.0.pop()
    }

    /// Relative form without a leading slash (`home/user`, empty for root).
    pub fn as_relative(&self) -> String {
        self.0.join("/")
    }

    /// Absolute form (`/home/user`, `/` for root).
    pub fn display(&self) -> String {
        format!("/{}", self.0.join("/"))
    }
}

impl fmt::Display for VirtualPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

impl From<String> for VirtualPath {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<&str> for VirtualPath {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl From<VirtualPath> for String {
    fn from(path: VirtualPath) -> Self {
        path.as_relative()
    }
}
