//! Test environment builder for isolated apigen runs.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

use super::fixtures::{CONTRACT, FAKE_GENERATOR};

/// Result of running the apigen binary
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated project directory.
///
/// The fake generator lives in a separate directory so it never shows up as
/// a project file.
pub struct TestEnv {
    pub project_root: TempDir,
    tools_dir: TempDir,
    apigen_bin: PathBuf,
}

impl TestEnv {
    pub fn builder() -> TestEnvBuilder {
        TestEnvBuilder::default()
    }

    /// Get path relative to project root
    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Write a contract into the default `openapi/` directory
    pub fn write_spec(&self, file_name: &str) {
        let path = self.project_path("openapi").join(file_name);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, CONTRACT).unwrap();
    }

    pub fn remove_spec(&self, file_name: &str) {
        fs::remove_file(self.project_path("openapi").join(file_name)).unwrap();
    }

    /// Inputs the fake generator has seen, one file name per call
    pub fn generator_calls(&self) -> Vec<String> {
        let log = self.tools_dir.path().join("generator.log");
        let Ok(content) = fs::read_to_string(log) else {
            return Vec::new();
        };
        content
            .lines()
            .filter_map(|line| Path::new(line).file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .collect()
    }

    /// Run apigen from the project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run apigen from the project root with extra env vars
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.apigen_bin);
        cmd.current_dir(self.project_root.path())
            .args(args)
            .env_remove("RUST_LOG")
            .env_remove("APIGEN_SPECS_DIR")
            .env_remove("APIGEN_BUILD_DIR")
            .env_remove("APIGEN_JOBS")
            .env_remove("APIGEN_GENERATOR_COMMAND");
        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("failed to run apigen");
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}

#[derive(Default)]
pub struct TestEnvBuilder {
    specs: Vec<String>,
    config: Option<String>,
    fake_generator: bool,
}

impl TestEnvBuilder {
    /// Add a contract file under `openapi/`
    pub fn with_spec(mut self, file_name: &str) -> Self {
        self.specs.push(file_name.to_string());
        self
    }

    /// Extra `apigen.toml` content, appended after the generator section
    pub fn with_config(mut self, toml: &str) -> Self {
        self.config = Some(toml.to_string());
        self
    }

    /// Point `[generator]` at the fake generator script
    pub fn with_fake_generator(mut self) -> Self {
        self.fake_generator = true;
        self
    }

    pub fn build(self) -> TestEnv {
        let env = TestEnv {
            project_root: tempfile::tempdir().unwrap(),
            tools_dir: tempfile::tempdir().unwrap(),
            apigen_bin: PathBuf::from(env!("CARGO_BIN_EXE_apigen")),
        };

        for spec in &self.specs {
            env.write_spec(spec);
        }

        let mut toml = String::new();
        if self.fake_generator {
            let script = env.tools_dir.path().join("openapi-generator.sh");
            fs::write(&script, FAKE_GENERATOR).unwrap();
            toml.push_str(&format!(
                "[generator]\ncommand = \"sh\"\nargs = ['{}']\n\n",
                script.display()
            ));
        }
        if let Some(config) = &self.config {
            toml.push_str(config);
        }
        if !toml.is_empty() {
            fs::write(env.project_path("apigen.toml"), toml).unwrap();
        }

        env
    }
}
