//! Index configuration.

use serde::{Deserialize, Serialize};

use super::error::IndexResult;

/// What to do when a record ID is added a second time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// Return `IndexError::DuplicateRecord` and leave the index untouched.
    #[default]
    Reject,
    /// Log a warning and leave the index untouched.
    Ignore,
}

/// Configuration for an index store and its query engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    /// Handling of re-added record IDs.
    pub duplicate_policy: DuplicatePolicy,
    /// Seed for the tie-break RNG. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl IndexConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> IndexResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Set the duplicate policy.
    pub fn duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicate_policy = policy;
        self
    }

    /// Fix the tie-break seed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
