use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Children of a directory, kept in insertion order.
pub type Children = IndexMap<String, Node>;

/// An entry in the virtual file system.
///
/// Serialized without tags: a JSON string is a file, a JSON object is a
/// directory. This keeps seed documents close to how they read:
///
/// ```json
/// { "home": { "user": { "notes.txt": "hello" } } }
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Node {
    Directory(Children),
    File(String),
}

impl Node {
    /// Create an empty directory.
    pub fn directory() -> Self {
        Node::Directory(Children::new())
    }

    /// Create a file with the given content.
    pub fn file(content: impl Into<String>) -> Self {
        Node::File(content.into())
    }

    /// Check if this entry is a directory.
    pub fn is_directory(&self) -> bool {
        matches!(self, Node::Directory(_))
    }

    /// Directory children, `None` for files.
    pub fn children(&self) -> Option<&Children> {
        match self {
            Node::Directory(children) => Some(children),
            Node::File(_) => None,
        }
    }

    pub fn children_mut(&mut self) -> Option<&mut Children> {
        match self {
            Node::Directory(children) => Some(children),
            Node::File(_) => None,
        }
    }

    /// File content, `None` for directories.
    pub fn content(&self) -> Option<&str> {
        match self {
            Node::File(content) => Some(content),
            Node::Directory(_) => None,
        }
    }

    /// True for directories with at least one child.
    pub fn has_children(&self) -> bool {
        self.children().is_some_and(|c| !c.is_empty())
    }

    /// Add a child, replacing any previous entry of the same name.
    ///
    /// Builder-style helper for constructing trees; no-op on files.
    pub fn with(mut self, name: impl Into<String>, child: Node) -> Self {
        if let Some(children) = self.children_mut() {
            children.insert(name.into(), child);
        }
        self
    }
}

/// Directory entry returned by `VirtualFs::list`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirEntry {
    pub name: String,
    pub is_dir: bool,
}

/// Check whether `name` may be used as a directory entry name.
///
/// Names are non-empty, contain no `/`, and are neither `.` nor `..`.
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && !name.contains('/') && name != "." && name != ".."
}
