//! Fingerprint Value Object
//!
//! Identifies the inputs of one generation unit so an unchanged unit can be
//! skipped on the next run.

use std::fmt;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// SHA-256 over a unit's contract bytes and its rendered invocation
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fingerprint(String);

impl Fingerprint {
    /// Prefix for SHA-256 fingerprints
    pub const PREFIX: &'static str = "sha256:";

    /// Hash the contract content together with the invocation description.
    ///
    /// Both parts are length-prefixed so moving bytes from one to the other
    /// changes the result.
    pub fn compute(contract: &[u8], invocation: &str) -> Self {
        let mut hasher = Sha256::new();
        hasher.update((contract.len() as u64).to_le_bytes());
        hasher.update(contract);
        hasher.update((invocation.len() as u64).to_le_bytes());
        hasher.update(invocation.as_bytes());
        Self(format!("{}{:x}", Self::PREFIX, hasher.finalize()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
