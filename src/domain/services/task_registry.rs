//! Generation task registry
//!
//! Holds exactly one generation unit per task name. Registration never looks
//! inside the contract document.

use std::collections::btree_map::{BTreeMap, Entry};

use crate::domain::entities::{GenerationUnit, SpecificationDocument, UnitTemplate};
use crate::error::{ApigenError, ApigenResult};

/// Registered generation units keyed by task name
#[derive(Debug, Clone)]
pub struct TaskRegistry {
    template: UnitTemplate,
    units: BTreeMap<String, GenerationUnit>,
}

impl TaskRegistry {
    pub fn new(template: UnitTemplate) -> Self {
        Self {
            template,
            units: BTreeMap::new(),
        }
    }

    /// Register the unit for `document`.
    ///
    /// Registering the same document again returns the existing unit. A
    /// different document that derives an already registered task name is a
    /// [`ApigenError::DuplicateTask`].
    pub fn register(&mut self, document: &SpecificationDocument) -> ApigenResult<&GenerationUnit> {
        let unit = self
            .template
            .instantiate(document)
            .map_err(|e| ApigenError::Naming {
                file: document.path().to_path_buf(),
                reason: e.to_string(),
            })?;

        match self.units.entry(unit.task_name().to_string()) {
            Entry::Occupied(existing) => {
                if existing.get().document() != document {
                    return Err(ApigenError::DuplicateTask {
                        task: existing.key().clone(),
                        first: existing.get().input_path().to_path_buf(),
                        second: document.path().to_path_buf(),
                    });
                }
                tracing::debug!(task = %existing.key(), "task already registered");
                Ok(existing.into_mut())
            }
            Entry::Vacant(slot) => {
                if !unit.identity().has_valid_package_fragment() {
                    tracing::warn!(
                        file = %document.file_name(),
                        fragment = unit.identity().package_fragment(),
                        "package fragment is not a valid Java identifier"
                    );
                }
                tracing::info!(
                    "Register task {} for {} into {}",
                    unit.task_name(),
                    document.file_name(),
                    unit.output_dir().display()
                );
                Ok(slot.insert(unit))
            }
        }
    }

    pub fn get(&self, task_name: &str) -> Option<&GenerationUnit> {
        self.units.get(task_name)
    }

    /// Units in task-name order
    pub fn units(&self) -> impl Iterator<Item = &GenerationUnit> {
        self.units.values()
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Hand over the registered units, in task-name order.
    pub fn into_units(self) -> Vec<GenerationUnit> {
        self.units.into_values().collect()
    }
}
