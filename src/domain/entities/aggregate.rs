//! Aggregate and compile nodes of the task graph
//!
//! The aggregate is the single choke point between generation and
//! compilation: compile depends on it, it depends on every unit.

use serde::Serialize;

use super::GenerationUnit;

/// Synthetic task whose completion means every contract has been generated
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AggregateUnit {
    name: String,
    dependencies: Vec<String>,
}

impl AggregateUnit {
    /// Build the aggregate over the final set of units.
    pub fn over<'a>(
        name: impl Into<String>,
        units: impl IntoIterator<Item = &'a GenerationUnit>,
    ) -> Self {
        let mut dependencies: Vec<String> = units
            .into_iter()
            .map(|u| u.task_name().to_string())
            .collect();
        dependencies.sort();
        dependencies.dedup();
        Self {
            name: name.into(),
            dependencies,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Task names of every unit, sorted
    pub fn dependencies(&self) -> &[String] {
        &self.dependencies
    }

    /// An aggregate with no dependencies completes without doing anything
    pub fn is_noop(&self) -> bool {
        self.dependencies.is_empty()
    }

    pub fn completion_message(&self) -> String {
        format!("{}: all specifications have been generated", self.name)
    }
}

/// The compilation step generated sources feed into
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompileStep {
    name: String,
    depends_on: Vec<String>,
}

impl CompileStep {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            depends_on: Vec::new(),
        }
    }

    /// Make this step depend on `aggregate`. Linking twice keeps one edge.
    pub fn link(&mut self, aggregate: &AggregateUnit) {
        if !self.depends_on.iter().any(|d| d == aggregate.name()) {
            self.depends_on.push(aggregate.name().to_string());
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn depends_on(&self) -> &[String] {
        &self.depends_on
    }
}
