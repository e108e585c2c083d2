//! SpecificationSource port - abstraction for discovering contract documents
//!
//! Lets graph construction run against a real directory or an in-memory list.

use std::path::Path;

use crate::domain::entities::SpecificationDocument;
use crate::error::ApigenResult;

/// Source of contract documents for one build
pub trait SpecificationSource {
    /// Discover every contract in `dir`, sorted by file name.
    ///
    /// A missing directory yields an empty list.
    fn discover(&self, dir: &Path) -> ApigenResult<Vec<SpecificationDocument>>;
}
