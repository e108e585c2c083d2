//! Up-to-date stamps for generation units
//!
//! A stamp in each unit's output directory records the fingerprint of the
//! inputs it was generated from.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::entities::GenerationUnit;
use crate::domain::value_objects::Fingerprint;
use crate::error::ApigenResult;

/// Stamp file name inside a unit's output directory
pub const STAMP_FILE_NAME: &str = ".apigen-stamp.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct Stamp {
    task: String,
    fingerprint: Fingerprint,
}

/// Reads and writes stamps for units
#[derive(Debug, Default, Clone, Copy)]
pub struct StampStore;

impl StampStore {
    pub fn new() -> Self {
        Self
    }

    pub fn stamp_path(unit: &GenerationUnit) -> PathBuf {
        unit.output_dir().join(STAMP_FILE_NAME)
    }

    /// Fingerprint of the unit's current inputs.
    pub fn fingerprint(&self, unit: &GenerationUnit) -> ApigenResult<Fingerprint> {
        let contract = fs::read(unit.input_path())?;
        let invocation = serde_json::to_string(&unit.invocation())?;
        Ok(Fingerprint::compute(&contract, &invocation))
    }

    /// True when the stored stamp matches and the source root still exists.
    ///
    /// Missing or unreadable stamps count as stale.
    pub fn is_up_to_date(&self, unit: &GenerationUnit, current: &Fingerprint) -> bool {
        if !unit.source_root().is_dir() {
            return false;
        }
        let Ok(content) = fs::read_to_string(Self::stamp_path(unit)) else {
            return false;
        };
        match serde_json::from_str::<Stamp>(&content) {
            Ok(stamp) => stamp.task == unit.task_name() && &stamp.fingerprint == current,
            Err(e) => {
                tracing::debug!(task = unit.task_name(), error = %e, "ignoring unreadable stamp");
                false
            }
        }
    }

    pub fn record(&self, unit: &GenerationUnit, fingerprint: &Fingerprint) -> ApigenResult<()> {
        let stamp = Stamp {
            task: unit.task_name().to_string(),
            fingerprint: fingerprint.clone(),
        };
        fs::create_dir_all(unit.output_dir())?;
        fs::write(Self::stamp_path(unit), serde_json::to_string_pretty(&stamp)?)?;
        Ok(())
    }
}
