//! Generate Use Case
//!
//! Phase two of a build: executes a finished task graph.
//!
//! This module handles:
//! - Running generation units in parallel, fail-fast
//! - Skipping units whose stamp shows unchanged inputs
//! - Completing the aggregate once every unit succeeded
//! - Running the compile command after the aggregate

mod options;
mod result;
mod use_case;

pub use options::GenerateOptions;
pub use result::{GenerateResult, UnitOutcome};
pub use use_case::GenerateUseCase;
