//! Domain Entities
//!
//! - `SpecificationDocument` - A contract file found on disk
//! - `GenerationUnit` - One generation task per document
//! - `AggregateUnit` / `CompileStep` - The fixed tail of the task graph

mod aggregate;
mod generation_unit;
mod specification;

pub use aggregate::{AggregateUnit, CompileStep};
pub use generation_unit::{GenerationUnit, GeneratorInvocation, UnitTemplate};
pub use specification::{SpecificationDocument, SPECIFICATION_EXTENSIONS};
