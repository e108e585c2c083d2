//! Compile command runner
//!
//! Runs the configured compile command once generation has finished, with
//! the generated source roots exported in `APIGEN_SOURCE_ROOTS`.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::domain::value_objects::SourceRoots;
use crate::error::{ApigenError, ApigenResult};

/// Environment variable carrying the source roots, joined by the platform separator
pub const SOURCE_ROOTS_ENV: &str = "APIGEN_SOURCE_ROOTS";

/// Compile step backed by an external command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileCommand {
    step: String,
    program: String,
    args: Vec<String>,
    working_dir: Option<PathBuf>,
}

impl CompileCommand {
    /// Returns `None` when no command is configured.
    pub fn new(step: impl Into<String>, command: &[String]) -> Option<Self> {
        let (program, args) = command.split_first()?;
        Some(Self {
            step: step.into(),
            program: program.clone(),
            args: args.to_vec(),
            working_dir: None,
        })
    }

    /// Run the command from `dir` instead of the current directory
    pub fn in_dir(mut self, dir: &Path) -> Self {
        self.working_dir = Some(dir.to_path_buf());
        self
    }

    pub fn run(&self, roots: &SourceRoots) -> ApigenResult<()> {
        let joined = roots.join_paths().map_err(|e| ApigenError::Compile {
            step: self.step.clone(),
            message: e.to_string(),
        })?;

        tracing::info!("{}: running {}", self.step, self.program);
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args)
            .env(SOURCE_ROOTS_ENV, joined)
            .stdin(Stdio::null());
        if let Some(dir) = &self.working_dir {
            cmd.current_dir(dir);
        }
        let status = cmd
            .status()
            .map_err(|e| ApigenError::Compile {
                step: self.step.clone(),
                message: format!("failed to run '{}': {}", self.program, e),
            })?;

        if !status.success() {
            return Err(ApigenError::Compile {
                step: self.step.clone(),
                message: format!("'{}' failed with exit code: {:?}", self.program, status.code()),
            });
        }
        Ok(())
    }
}
