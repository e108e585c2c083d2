//! apigen - declarative task graphs for contract-driven code generation
//!
//! apigen scans a directory of OpenAPI contracts, derives one generation task
//! per contract, ties them together under an aggregate task and wires the
//! generated source roots into the compile step. Building the graph is a pure
//! first phase; running it is a separate second phase.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;
pub mod presentation;

// Re-exports for convenience
pub use application::{BuildContext, GenerateOptions, GenerateResult, GenerateUseCase};
pub use config::Config;
pub use domain::entities::{AggregateUnit, CompileStep, GenerationUnit, SpecificationDocument};
pub use domain::services::TaskGraph;
pub use domain::value_objects::{DerivedIdentity, SourceRoots};
pub use error::{ApigenError, ApigenResult};
