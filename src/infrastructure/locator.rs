//! File System Specification Locator
//!
//! Lists contract documents directly inside a directory.

use std::fs;
use std::io;
use std::path::Path;

use crate::domain::entities::SpecificationDocument;
use crate::domain::ports::SpecificationSource;
use crate::error::{ApigenError, ApigenResult};

/// Locator that reads a single directory level
#[derive(Debug, Default, Clone, Copy)]
pub struct FsSpecificationLocator;

impl FsSpecificationLocator {
    pub fn new() -> Self {
        Self
    }

    fn scan(dir: &Path) -> ApigenResult<Vec<SpecificationDocument>> {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(ApigenError::NotFound {
                    path: dir.to_path_buf(),
                })
            }
            Err(e) => return Err(e.into()),
        };

        let mut documents = Vec::new();
        for entry in entries {
            let entry = entry?;
            let path = entry.path();
            if !entry.file_type()?.is_file() && !path.is_file() {
                continue;
            }
            if !SpecificationDocument::is_specification(&path) {
                continue;
            }
            let document = SpecificationDocument::from_path(&path).ok_or_else(|| {
                ApigenError::Naming {
                    file: path.clone(),
                    reason: "file name is not valid UTF-8".to_string(),
                }
            })?;
            documents.push(document);
        }

        // Sort by file name for a reproducible graph
        documents.sort_by_key(SpecificationDocument::file_name);
        Ok(documents)
    }
}

impl SpecificationSource for FsSpecificationLocator {
    fn discover(&self, dir: &Path) -> ApigenResult<Vec<SpecificationDocument>> {
        let documents = match Self::scan(dir) {
            Ok(documents) => documents,
            Err(ApigenError::NotFound { path }) => {
                tracing::warn!(
                    "Specification directory {} does not exist, continuing with none",
                    path.display()
                );
                Vec::new()
            }
            Err(e) => return Err(e),
        };

        let names: Vec<String> = documents.iter().map(SpecificationDocument::file_name).collect();
        tracing::info!(
            "Found {} specifications: {}",
            documents.len(),
            names.join(", ")
        );
        Ok(documents)
    }
}
