//! Compilation source roots

use std::path::{Path, PathBuf};

use serde::Serialize;

/// Ordered set of directories handed to the compile step.
///
/// Insertion order is kept; adding a root twice leaves a single entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SourceRoots {
    roots: Vec<PathBuf>,
}

impl SourceRoots {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a root. Returns `false` when it was already present.
    pub fn add(&mut self, root: impl Into<PathBuf>) -> bool {
        let root = root.into();
        if self.contains(&root) {
            return false;
        }
        self.roots.push(root);
        true
    }

    pub fn contains(&self, root: &Path) -> bool {
        self.roots.iter().any(|r| r == root)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.roots.iter().map(PathBuf::as_path)
    }

    pub fn len(&self) -> usize {
        self.roots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Join the roots with the platform path separator (`:` or `;`).
    pub fn join_paths(&self) -> Result<std::ffi::OsString, std::env::JoinPathsError> {
        std::env::join_paths(self.roots.iter())
    }
}
