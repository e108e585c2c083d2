//! Build context
//!
//! One value per invocation holding the project root, the effective
//! configuration and the documents discovered for this build.

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::domain::entities::SpecificationDocument;
use crate::domain::ports::SpecificationSource;
use crate::domain::services::TaskGraph;
use crate::error::ApigenResult;

#[derive(Debug, Clone)]
pub struct BuildContext {
    project_root: PathBuf,
    config: Config,
    documents: Vec<SpecificationDocument>,
}

impl BuildContext {
    /// Scan the configured specification directory once.
    pub fn discover(
        project_root: impl Into<PathBuf>,
        config: Config,
        source: &dyn SpecificationSource,
    ) -> ApigenResult<Self> {
        let project_root = project_root.into();
        let documents = source.discover(&config.specs_dir(&project_root))?;
        Ok(Self {
            project_root,
            config,
            documents,
        })
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn documents(&self) -> &[SpecificationDocument] {
        &self.documents
    }

    /// Phase one: describe the whole build without running anything.
    pub fn task_graph(&self) -> ApigenResult<TaskGraph> {
        TaskGraph::build(
            &self.documents,
            &self.config.graph_settings(&self.project_root),
        )
    }
}
