//! Configuration loading

use std::fs;
use std::path::Path;

use crate::error::{ApigenError, ApigenResult};

use super::types::Config;

pub use super::warning::ConfigWarning;

/// Project configuration file name
pub const CONFIG_FILE_NAME: &str = "apigen.toml";

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> ApigenResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ApigenError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
                file: path.to_path_buf(),
                key,
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load the explicit file, the project file, or defaults; then apply env overrides.
pub fn load_for_project(
    project_root: &Path,
    explicit: Option<&Path>,
) -> ApigenResult<(Config, Vec<ConfigWarning>)> {
    let (config, warnings) = match explicit {
        Some(path) => load_with_warnings(path)?,
        None => {
            let project_config = project_root.join(CONFIG_FILE_NAME);
            if project_config.is_file() {
                load_with_warnings(&project_config)?
            } else {
                tracing::debug!("no {} found, using defaults", CONFIG_FILE_NAME);
                (Config::default(), Vec::new())
            }
        }
    };

    Ok((with_env_overrides(config), warnings))
}

/// Apply environment variable overrides (APIGEN_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_overrides(config, |key| std::env::var(key).ok())
}

/// Apply overrides from any key/value source
pub(crate) fn apply_overrides(
    mut config: Config,
    lookup: impl Fn(&str) -> Option<String>,
) -> Config {
    // APIGEN_SPECS_DIR
    if let Some(dir) = lookup("APIGEN_SPECS_DIR").filter(|v| !v.is_empty()) {
        config.specs.dir = dir.into();
    }

    // APIGEN_BUILD_DIR
    if let Some(dir) = lookup("APIGEN_BUILD_DIR").filter(|v| !v.is_empty()) {
        config.output.build_dir = dir.into();
    }

    // APIGEN_JOBS
    if let Some(jobs) = lookup("APIGEN_JOBS") {
        match jobs.trim().parse::<usize>() {
            Ok(n) => config.execution.jobs = n,
            Err(_) => tracing::warn!("ignoring APIGEN_JOBS={jobs}: not a number"),
        }
    }

    // APIGEN_GENERATOR_COMMAND
    if let Some(command) = lookup("APIGEN_GENERATOR_COMMAND").filter(|v| !v.is_empty()) {
        config.generator.command = command;
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "specs",
        "dir",
        "output",
        "build_dir",
        "root",
        "language",
        "packages",
        "generator",
        "name",
        "command",
        "args",
        "options",
        "library",
        "use_bean_validation",
        "open_api_nullable",
        "skip_default_interface",
        "use_tags",
        "use_jakarta_ee",
        "collection_initialization",
        "accessor_style",
        "feign_client_url",
        "tasks",
        "aggregate",
        "compile",
        "execution",
        "jobs",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
