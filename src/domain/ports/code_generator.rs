//! CodeGenerator port - the external code emitter
//!
//! One call per generation unit. Implementations must be shareable across
//! worker threads since independent units run concurrently.

use crate::domain::entities::GeneratorInvocation;

/// Failure reported by a generator for one invocation
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
#[error("{message}")]
pub struct GeneratorError {
    pub message: String,
}

impl GeneratorError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Turns one contract into generated sources under `invocation.output_dir`
pub trait CodeGenerator: Sync {
    fn generate(&self, invocation: &GeneratorInvocation<'_>) -> Result<(), GeneratorError>;
}
