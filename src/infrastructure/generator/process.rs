//! Process Generator
//!
//! Runs an external `openapi-generator`-compatible command once per unit.

use std::ffi::OsString;
use std::process::{Command, Stdio};

use crate::domain::entities::GeneratorInvocation;
use crate::domain::ports::{CodeGenerator, GeneratorError};

/// Keys passed as dedicated flags instead of additional properties
const DEDICATED_KEYS: &[&str] = &["library", "apiPackage", "modelPackage"];

/// How many trailing stderr lines end up in an error message
const STDERR_TAIL_LINES: usize = 20;

/// Generator backed by an external command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessGenerator {
    program: String,
    args: Vec<String>,
}

impl ProcessGenerator {
    /// Build from a command line: the program followed by fixed leading args
    /// (for example `["java", "-jar", "openapi-generator-cli.jar"]`).
    ///
    /// Returns `None` for an empty command line.
    pub fn from_command_line(command: &[String]) -> Option<Self> {
        let (program, args) = command.split_first()?;
        Some(Self {
            program: program.clone(),
            args: args.to_vec(),
        })
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Arguments for one invocation, after the fixed leading args.
    pub fn invocation_args(invocation: &GeneratorInvocation<'_>) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec![
            "generate".into(),
            "-g".into(),
            invocation.generator_name.into(),
            "-i".into(),
            invocation.input_path.into(),
            "-o".into(),
            invocation.output_dir.into(),
            "--api-package".into(),
            invocation.api_package.into(),
            "--model-package".into(),
            invocation.model_package.into(),
        ];

        if let Some(library) = invocation.config_options.get("library") {
            args.push("--library".into());
            args.push(library.into());
        }

        let properties: Vec<String> = invocation
            .config_options
            .iter()
            .filter(|(key, _)| !DEDICATED_KEYS.contains(&key.as_str()))
            .chain(invocation.additional_properties.iter())
            .map(|(key, value)| format!("{key}={value}"))
            .collect();
        if !properties.is_empty() {
            args.push(format!("--additional-properties={}", properties.join(",")).into());
        }

        args
    }
}

impl CodeGenerator for ProcessGenerator {
    fn generate(&self, invocation: &GeneratorInvocation<'_>) -> Result<(), GeneratorError> {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args)
            .args(Self::invocation_args(invocation))
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        tracing::debug!(command = ?cmd, "running generator");

        let output = cmd
            .output()
            .map_err(|e| GeneratorError::new(format!("failed to run '{}': {}", self.program, e)))?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        for line in stdout.lines() {
            tracing::trace!("{}", line);
        }

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let lines: Vec<&str> = stderr.lines().collect();
            let tail = lines[lines.len().saturating_sub(STDERR_TAIL_LINES)..].join("\n");
            let status = match output.status.code() {
                Some(code) => format!("exit code {code}"),
                None => "terminated by signal".to_string(),
            };
            return Err(GeneratorError::new(if tail.is_empty() {
                format!("'{}' failed with {}", self.program, status)
            } else {
                format!("'{}' failed with {}:\n{}", self.program, status, tail)
            }));
        }

        Ok(())
    }
}
