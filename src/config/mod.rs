//! Configuration module for apigen
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (APIGEN_*)
//! 3. Project config (apigen.toml)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;
mod warning;

pub use loader::CONFIG_FILE_NAME;
pub use types::{
    CompileConfig, Config, ExecutionConfig, GeneratorConfig, OutputConfig, PackagesConfig,
    SpecsConfig, TasksConfig,
};
pub use warning::ConfigWarning;
