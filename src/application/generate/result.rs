//! Generate result types

use serde::Serialize;

/// What happened to one unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitOutcome {
    /// Generator ran
    Generated,
    /// Stamp matched, generator not run
    UpToDate,
}

impl std::fmt::Display for UnitOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnitOutcome::Generated => write!(f, "generated"),
            UnitOutcome::UpToDate => write!(f, "up-to-date"),
        }
    }
}

/// Result of a successful generate run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GenerateResult {
    /// Units the generator ran for, sorted
    pub generated: Vec<String>,
    /// Units skipped as up to date, sorted
    pub up_to_date: Vec<String>,
    /// Aggregate task name, when it ran
    pub aggregate: Option<String>,
    /// Compile step name, when its command ran
    pub compiled: Option<String>,
}

impl GenerateResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a unit outcome
    pub fn add(&mut self, task: String, outcome: UnitOutcome) {
        match outcome {
            UnitOutcome::Generated => self.generated.push(task),
            UnitOutcome::UpToDate => self.up_to_date.push(task),
        }
    }

    /// Number of units that completed
    pub fn unit_count(&self) -> usize {
        self.generated.len() + self.up_to_date.len()
    }

    pub(crate) fn sort(&mut self) {
        self.generated.sort();
        self.up_to_date.sort();
    }
}
