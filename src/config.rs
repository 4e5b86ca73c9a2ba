// Copyright 2025 Cowboy AI, LLC.

//! Configuration for law checking runs

use serde::{Deserialize, Serialize};

use crate::errors::{LawError, LawResult};

/// How a [`crate::laws::LawChecker`] drives sample streams
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LawCheckConfig {
    /// Maximum number of samples drawn from each stream
    pub sample_count: usize,
    /// Stop a check at its first counterexample
    pub stop_on_first_violation: bool,
    /// Keep a `Debug` rendering of each counterexample
    pub record_counterexamples: bool,
    /// Upper bound on violations kept per check
    pub max_recorded_violations: usize,
}

impl Default for LawCheckConfig {
    fn default() -> Self {
        Self {
            sample_count: 256,
            stop_on_first_violation: true,
            record_counterexamples: true,
            max_recorded_violations: 8,
        }
    }
}

impl LawCheckConfig {
    /// Parse and validate a configuration; missing fields take their defaults
    pub fn from_json(json: &str) -> LawResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Set the per-stream sample limit
    pub fn with_sample_count(mut self, sample_count: usize) -> Self {
        self.sample_count = sample_count;
        self
    }

    /// Keep checking after a counterexample is found
    pub fn exhaustive(mut self) -> Self {
        self.stop_on_first_violation = false;
        self
    }

    /// Reject configurations under which a check could never run
    pub fn validate(&self) -> LawResult<()> {
        if self.sample_count == 0 {
            return Err(LawError::InvalidConfiguration(
                "sample_count must be at least 1".to_string(),
            ));
        }
        if self.record_counterexamples && self.max_recorded_violations == 0 {
            return Err(LawError::InvalidConfiguration(
                "max_recorded_violations must be at least 1 when recording counterexamples"
                    .to_string(),
            ));
        }
        Ok(())
    }
}
