//! Textual path resolution.
//!
//! Turns user input such as `..`, `documents/./notes` or `/home/user` into a
//! canonical [`VirtualPath`]. Resolution is purely lexical: it never consults
//! the file system, so callers check existence with `VirtualFs::lookup`.

use crate::models::VirtualPath;

/// Resolve `input` against the current directory.
///
/// - `/...` starts at root
/// - `~` is the home directory
/// - anything else starts at `cwd`
///
/// Segments are then applied left to right: `..` pops (no-op at root), `.` and
/// empty segments are skipped, and any other segment is appended.
pub fn resolve(input: &str, cwd: &VirtualPath, home: &VirtualPath) -> VirtualPath {
    if input == "~" {
        return home.clone();
    }

    let (mut resolved, rest) = match input.strip_prefix('/') {
        Some(rest) => (VirtualPath::root(), rest),
        None => (cwd.clone(), input),
    };

    for segment in rest.split('/') {
        match segment {
            ".." => {
                resolved.pop();
            }
            "." | "" => {}
            name => resolved.push(name),
        }
    }

    tracing::trace!(input, resolved = %resolved, "resolved path");
    resolved
}
