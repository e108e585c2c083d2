//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod code_generator;
pub mod specification_source;

pub use code_generator::{CodeGenerator, GeneratorError};
pub use specification_source::SpecificationSource;
