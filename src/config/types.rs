//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::entities::UnitTemplate;
use crate::domain::services::GraphSettings;
use crate::domain::value_objects::GeneratorOptions;
use crate::error::ApigenResult;

use super::loader::{self, ConfigWarning};

/// Where contract documents live
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecsConfig {
    #[serde(default = "default_specs_dir")]
    pub dir: PathBuf,
}

impl Default for SpecsConfig {
    fn default() -> Self {
        Self {
            dir: default_specs_dir(),
        }
    }
}

fn default_specs_dir() -> PathBuf {
    PathBuf::from("openapi")
}

/// Where generated sources go
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_build_dir")]
    pub build_dir: PathBuf,

    /// Relative to `build_dir`
    #[serde(default = "default_output_root")]
    pub root: PathBuf,

    /// Directory under `src/main/` wired into compilation
    #[serde(default = "default_language")]
    pub language: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            build_dir: default_build_dir(),
            root: default_output_root(),
            language: default_language(),
        }
    }
}

fn default_build_dir() -> PathBuf {
    PathBuf::from("build")
}

fn default_output_root() -> PathBuf {
    PathBuf::from("generated-sources/openapi")
}

fn default_language() -> String {
    "java".to_string()
}

/// Package naming
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackagesConfig {
    #[serde(default = "default_package_root")]
    pub root: String,
}

impl Default for PackagesConfig {
    fn default() -> Self {
        Self {
            root: default_package_root(),
        }
    }
}

fn default_package_root() -> String {
    "com.example".to_string()
}

/// The external generator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Generator identifier passed with `-g`
    #[serde(default = "default_generator_name")]
    pub name: String,

    #[serde(default = "default_generator_command")]
    pub command: String,

    /// Fixed arguments placed before `generate`
    #[serde(default)]
    pub args: Vec<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            name: default_generator_name(),
            command: default_generator_command(),
            args: Vec::new(),
        }
    }
}

impl GeneratorConfig {
    /// Command followed by its fixed arguments
    pub fn command_line(&self) -> Vec<String> {
        std::iter::once(self.command.clone())
            .chain(self.args.iter().cloned())
            .collect()
    }
}

fn default_generator_name() -> String {
    "spring".to_string()
}

fn default_generator_command() -> String {
    "openapi-generator-cli".to_string()
}

/// Names of the fixed graph nodes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TasksConfig {
    #[serde(default = "default_aggregate_name")]
    pub aggregate: String,

    #[serde(default = "default_compile_name")]
    pub compile: String,
}

impl Default for TasksConfig {
    fn default() -> Self {
        Self {
            aggregate: default_aggregate_name(),
            compile: default_compile_name(),
        }
    }
}

fn default_aggregate_name() -> String {
    "generateAllOpenApi".to_string()
}

fn default_compile_name() -> String {
    "compileJava".to_string()
}

/// Compile step command
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompileConfig {
    /// Empty means generation stops after the aggregate
    #[serde(default)]
    pub command: Vec<String>,
}

/// Execution settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExecutionConfig {
    /// Worker threads; 0 uses the available parallelism
    #[serde(default)]
    pub jobs: usize,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub specs: SpecsConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub packages: PackagesConfig,

    #[serde(default)]
    pub generator: GeneratorConfig,

    #[serde(default)]
    pub options: GeneratorOptions,

    #[serde(default)]
    pub tasks: TasksConfig,

    #[serde(default)]
    pub compile: CompileConfig,

    #[serde(default)]
    pub execution: ExecutionConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> ApigenResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> ApigenResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load `explicit`, else `<project_root>/apigen.toml` if present, else
    /// defaults. Environment overrides are applied on top.
    pub fn load_for_project(
        project_root: &Path,
        explicit: Option<&Path>,
    ) -> ApigenResult<(Self, Vec<ConfigWarning>)> {
        loader::load_for_project(project_root, explicit)
    }

    /// Apply environment variable overrides (APIGEN_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Specification directory, resolved against `project_root`
    pub fn specs_dir(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.specs.dir)
    }

    /// Root that holds one directory per unit
    pub fn output_root(&self, project_root: &Path) -> PathBuf {
        project_root
            .join(&self.output.build_dir)
            .join(&self.output.root)
    }

    /// Worker count, with 0 meaning the available parallelism
    pub fn jobs(&self) -> usize {
        match self.execution.jobs {
            0 => std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1),
            n => n,
        }
    }

    /// Settings for building the task graph of `project_root`
    pub fn graph_settings(&self, project_root: &Path) -> GraphSettings {
        GraphSettings {
            template: UnitTemplate {
                generator_name: self.generator.name.clone(),
                output_root: self.output_root(project_root),
                source_language: self.output.language.clone(),
                package_root: self.packages.root.clone(),
                options: self.options.clone(),
            },
            aggregate_name: self.tasks.aggregate.clone(),
            compile_name: self.tasks.compile.clone(),
        }
    }
}
