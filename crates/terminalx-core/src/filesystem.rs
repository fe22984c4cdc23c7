use std::sync::Arc;

use crate::config::seed;
use crate::error::{SeedError, VfsError};
use crate::models::{Children, DirEntry, Node, VirtualPath, is_valid_name};

/// In-memory virtual file system.
///
/// The tree is held behind an [`Arc`]. Mutations deep-copy the tree, apply the
/// change to the copy, and swap it in only on success, so a snapshot taken
/// with [`VirtualFs::snapshot`] never observes a half-applied change and a
/// failed mutation leaves the tree untouched.
///
/// # Path Convention
///
/// - Root of the tree: [`VirtualPath::root`]
/// - Nested entry: `VirtualPath::parse("home/user/README.md")`
#[derive(Clone, Debug)]
pub struct VirtualFs {
    /// Root directory entry containing all files
    root: Arc<Node>,
}

impl VirtualFs {
    /// Create the file system every session starts with.
    ///
    /// ```text
    /// /
    /// ├── home/user/{README.md, documents/project-plan.txt, secret.txt, image.jpg}
    /// ├── system.log
    /// └── config.json
    /// ```
    pub fn seeded() -> Self {
        let user = Node::directory()
            .with("README.md", Node::file(seed::README))
            .with(
                "documents",
                Node::directory().with("project-plan.txt", Node::file(seed::PROJECT_PLAN)),
            )
            .with("secret.txt", Node::file(seed::SECRET))
            .with("image.jpg", Node::file(seed::IMAGE));

        let root = Node::directory()
            .with("home", Node::directory().with("user", user))
            .with("system.log", Node::file(seed::SYSTEM_LOG))
            .with("config.json", Node::file(seed::CONFIG_JSON));

        Self {
            root: Arc::new(root),
        }
    }

    /// Build a file system from a root node.
    ///
    /// Every name in the tree must pass [`is_valid_name`].
    pub fn from_root(root: Node) -> Result<Self, SeedError> {
        let Some(children) = root.children() else {
            return Err(SeedError::RootNotDirectory);
        };
        validate_names(children)?;
        Ok(Self {
            root: Arc::new(root),
        })
    }

    /// Build a file system from a JSON seed document.
    ///
    /// Strings are files and objects are directories; the top level must be
    /// an object.
    pub fn from_json(json: &str) -> Result<Self, SeedError> {
        let root: Node = serde_json::from_str(json)?;
        Self::from_root(root)
    }

    /// Shared handle to the current tree.
    pub fn snapshot(&self) -> Arc<Node> {
        Arc::clone(&self.root)
    }

    /// Get an entry by path.
    ///
    /// Returns `None` if any segment is missing or if an intermediate segment
    /// is a file.
    pub fn lookup(&self, path: &VirtualPath) -> Option<&Node> {
        walk(&self.root, path)
    }

    /// Check if a path is an existing directory.
    pub fn is_directory(&self, path: &VirtualPath) -> bool {
        self.lookup(path).is_some_and(Node::is_directory)
    }

    /// List directory contents in insertion order.
    pub fn list(&self, path: &VirtualPath) -> Result<Vec<DirEntry>, VfsError> {
        match self.lookup(path) {
            Some(Node::Directory(children)) => Ok(children
                .iter()
                .map(|(name, node)| DirEntry {
                    name: name.clone(),
                    is_dir: node.is_directory(),
                })
                .collect()),
            Some(Node::File(_)) => Err(VfsError::NotADirectory(path.display())),
            None => Err(VfsError::NotFound(path.display())),
        }
    }

    /// Read a file's content.
    pub fn read_file(&self, path: &VirtualPath) -> Result<&str, VfsError> {
        match self.lookup(path) {
            Some(Node::File(content)) => Ok(content),
            Some(Node::Directory(_)) => Err(VfsError::IsADirectory(path.display())),
            None => Err(VfsError::NotFound(path.display())),
        }
    }

    /// Create an empty directory `name` under `parent`.
    pub fn insert_directory(&mut self, parent: &VirtualPath, name: &str) -> Result<(), VfsError> {
        if !is_valid_name(name) {
            return Err(VfsError::InvalidName(name.to_string()));
        }

        self.mutate(parent, |children| {
            if children.contains_key(name) {
                return Err(VfsError::AlreadyExists(name.to_string()));
            }
            children.insert(name.to_string(), Node::directory());
            Ok(())
        })?;

        tracing::debug!(parent = %parent, name, "mkdir");
        Ok(())
    }

    /// Remove the file or empty directory `name` from `parent`.
    pub fn remove(&mut self, parent: &VirtualPath, name: &str) -> Result<(), VfsError> {
        self.mutate(parent, |children| {
            match children.get(name) {
                None => return Err(VfsError::NotFound(name.to_string())),
                Some(node) if node.has_children() => {
                    return Err(VfsError::NotEmpty(name.to_string()));
                }
                Some(_) => {}
            }
            // Keep the remaining entries in their original order
            children.shift_remove(name);
            Ok(())
        })?;

        tracing::debug!(parent = %parent, name, "rm");
        Ok(())
    }

    /// Apply `op` to the children of the directory at `parent` on a copy of
    /// the tree, then swap the copy in if `op` succeeded.
    fn mutate<F>(&mut self, parent: &VirtualPath, op: F) -> Result<(), VfsError>
    where
        F: FnOnce(&mut Children) -> Result<(), VfsError>,
    {
        let mut next = Node::clone(&self.root);

        let mut current = &mut next;
        for segment in parent.segments() {
            current = match current {
                Node::Directory(children) => children
                    .get_mut(segment)
                    .ok_or_else(|| VfsError::NotFound(parent.display()))?,
                Node::File(_) => return Err(VfsError::NotADirectory(parent.display())),
            };
        }

        let children = current
            .children_mut()
            .ok_or_else(|| VfsError::NotADirectory(parent.display()))?;
        op(children)?;

        self.root = Arc::new(next);
        Ok(())
    }
}

impl Default for VirtualFs {
    fn default() -> Self {
        Self::seeded()
    }
}

fn walk<'a>(root: &'a Node, path: &VirtualPath) -> Option<&'a Node> {
    let mut current = root;
    for segment in path.segments() {
        current = current.children()?.get(segment)?;
    }
    Some(current)
}

fn validate_names(children: &Children) -> Result<(), SeedError> {
    for (name, node) in children {
        if !is_valid_name(name) {
            return Err(SeedError::InvalidName(name.clone()));
        }
        if let Some(grandchildren) = node.children() {
            validate_names(grandchildren)?;
        }
    }
    Ok(())
}
