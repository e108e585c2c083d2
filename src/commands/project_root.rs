//! Project root resolution

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// `--project` resolved against the working directory, or the working directory itself
pub fn resolve_project_root(project: Option<&Path>) -> Result<PathBuf> {
    let cwd = std::env::current_dir().context("cannot determine the current directory")?;
    Ok(resolve_against(&cwd, project))
}

fn resolve_against(cwd: &Path, project: Option<&Path>) -> PathBuf {
    match project {
        Some(path) if path.is_absolute() => path.to_path_buf(),
        Some(path) => cwd.join(path),
        None => cwd.to_path_buf(),
    }
}
