//! Task graph construction
//!
//! Phase one of a build: turn the discovered documents into units, the
//! aggregate, the source-root list and the compile edge. No I/O happens here;
//! the result is handed to the executor as a finished, immutable value.

use serde::Serialize;

use super::TaskRegistry;
use crate::domain::entities::{
    AggregateUnit, CompileStep, GenerationUnit, SpecificationDocument, UnitTemplate,
};
use crate::domain::value_objects::SourceRoots;
use crate::error::{ApigenError, ApigenResult};

/// Settings that shape the graph beyond the documents themselves
#[derive(Debug, Clone)]
pub struct GraphSettings {
    pub template: UnitTemplate,
    pub aggregate_name: String,
    pub compile_name: String,
}

/// The complete description of one build
#[derive(Debug, Clone, Serialize)]
pub struct TaskGraph {
    documents: Vec<SpecificationDocument>,
    units: Vec<GenerationUnit>,
    aggregate: AggregateUnit,
    source_roots: SourceRoots,
    compile: CompileStep,
}

impl TaskGraph {
    /// Build the graph for `documents`.
    ///
    /// Fails on the first naming error or duplicate task name; nothing is
    /// returned for a partially valid set.
    pub fn build(
        documents: &[SpecificationDocument],
        settings: &GraphSettings,
    ) -> ApigenResult<Self> {
        let mut registry = TaskRegistry::new(settings.template.clone());
        for document in documents {
            registry.register(document)?;
        }
        let units = registry.into_units();

        let aggregate = AggregateUnit::over(&settings.aggregate_name, &units);

        let mut source_roots = SourceRoots::new();
        for unit in &units {
            source_roots.add(unit.source_root());
        }

        let mut compile = CompileStep::new(&settings.compile_name);
        compile.link(&aggregate);

        Ok(Self {
            documents: documents.to_vec(),
            units,
            aggregate,
            source_roots,
            compile,
        })
    }

    pub fn documents(&self) -> &[SpecificationDocument] {
        &self.documents
    }

    /// Units in task-name order
    pub fn units(&self) -> &[GenerationUnit] {
        &self.units
    }

    pub fn unit(&self, task_name: &str) -> Option<&GenerationUnit> {
        self.units.iter().find(|u| u.task_name() == task_name)
    }

    pub fn aggregate(&self) -> &AggregateUnit {
        &self.aggregate
    }

    pub fn source_roots(&self) -> &SourceRoots {
        &self.source_roots
    }

    pub fn compile(&self) -> &CompileStep {
        &self.compile
    }

    /// Every node in an order that respects the edges: units, aggregate, compile.
    pub fn execution_order(&self) -> Vec<&str> {
        self.units
            .iter()
            .map(GenerationUnit::task_name)
            .chain([self.aggregate.name(), self.compile.name()])
            .collect()
    }

    /// Units needed to run the named tasks.
    ///
    /// An empty selection, the aggregate or the compile step all select every
    /// unit. Every name is checked, and any unknown name is an error.
    pub fn select(&self, names: &[String]) -> ApigenResult<Vec<&GenerationUnit>> {
        let mut selected: Vec<&GenerationUnit> = Vec::new();
        let mut everything = names.is_empty();
        for name in names {
            if name == self.aggregate.name() || name == self.compile.name() {
                everything = true;
                continue;
            }
            let unit = self.unit(name).ok_or_else(|| ApigenError::UnknownTask {
                name: name.clone(),
            })?;
            if !selected.iter().any(|u| u.task_name() == unit.task_name()) {
                selected.push(unit);
            }
        }

        if everything {
            return Ok(self.units.iter().collect());
        }
        selected.sort_by(|a, b| a.task_name().cmp(b.task_name()));
        Ok(selected)
    }
}
