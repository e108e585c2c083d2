//! SpecificationDocument entity - one discovered API contract
//!
//! The document's content is opaque; only its path and base name matter.

use std::path::{Path, PathBuf};

use serde::Serialize;

/// File extensions recognized as contract documents
pub const SPECIFICATION_EXTENSIONS: &[&str] = &["yaml", "yml"];

/// A contract file found by the locator
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct SpecificationDocument {
    /// Absolute path of the document
    path: PathBuf,
    /// File name without its final extension
    base_name: String,
}

impl SpecificationDocument {
    /// Build a document from its path. Returns `None` when the path has no
    /// UTF-8 file name.
    ///
    /// The base name is everything before the last `.`, so `.yaml` has an
    /// empty base name and is rejected later by the deriver.
    pub fn from_path(path: impl Into<PathBuf>) -> Option<Self> {
        let path = path.into();
        let file_name = path.file_name()?.to_str()?;
        let base_name = file_name
            .rsplit_once('.')
            .map_or(file_name, |(base, _)| base)
            .to_string();
        Some(Self { path, base_name })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn base_name(&self) -> &str {
        &self.base_name
    }

    /// File name including extension, for diagnostics
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.base_name.clone())
    }

    /// Whether `path` carries one of the recognized extensions.
    ///
    /// The extension is the text after the last `.` of the file name, dotfiles
    /// included. Names that are not UTF-8 still match on their extension.
    pub fn is_specification(path: &Path) -> bool {
        path.file_name()
            .map(|name| name.to_string_lossy())
            .and_then(|name| {
                name.rsplit_once('.')
                    .map(|(_, ext)| SPECIFICATION_EXTENSIONS.contains(&ext))
            })
            .unwrap_or(false)
    }
}
