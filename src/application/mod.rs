//! Application Layer
//!
//! Use cases that orchestrate the build.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain naming or graph rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `BuildContext` - Phase one: discovery and the task graph
//! - `GenerateUseCase` - Phase two: units, aggregate, compile step

mod context;
pub mod generate;

pub use context::BuildContext;
pub use generate::{GenerateOptions, GenerateResult, GenerateUseCase, UnitOutcome};
