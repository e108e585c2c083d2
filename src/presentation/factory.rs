//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.

use crate::application::GenerateUseCase;
use std::path::Path;

use crate::config::{Config, CONFIG_FILE_NAME};
use crate::error::{ApigenError, ApigenResult};
use crate::infrastructure::{CompileCommand, ProcessGenerator};

/// Type alias for the generate use case driven by an external command
pub type ConcreteGenerateUseCase = GenerateUseCase<ProcessGenerator>;

/// Create a generate use case from the effective configuration.
///
/// The compile command is only attached when `[compile] command` is set and
/// runs from `project_root`.
pub fn create_generate_use_case(
    config: &Config,
    project_root: &Path,
) -> ApigenResult<ConcreteGenerateUseCase> {
    let generator = Some(config.generator.command_line())
        .filter(|_| !config.generator.command.trim().is_empty())
        .and_then(|command| ProcessGenerator::from_command_line(&command))
        .ok_or_else(|| ApigenError::InvalidConfig {
            file: CONFIG_FILE_NAME.into(),
            message: "generator.command must not be empty".to_string(),
        })?;
    tracing::debug!("generator command: {}", generator.program());

    let compile = CompileCommand::new(&config.tasks.compile, &config.compile.command)
        .map(|command| command.in_dir(project_root));
    Ok(GenerateUseCase::new(generator).with_compile_command(compile))
}
