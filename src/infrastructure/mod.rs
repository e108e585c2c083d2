//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `locator` - Directory scan for contract documents
//! - `generator/` - External generator adapters
//! - `stamp` - Up-to-date stamps in unit output directories
//! - `compile` - The compile command run after generation

pub mod compile;
pub mod generator;
pub mod locator;
pub mod stamp;

// Re-export for convenience
pub use compile::{CompileCommand, SOURCE_ROOTS_ENV};
pub use generator::ProcessGenerator;
pub use locator::FsSpecificationLocator;
pub use stamp::{StampStore, STAMP_FILE_NAME};
