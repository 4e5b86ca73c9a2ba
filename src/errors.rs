// Copyright 2025 Cowboy AI, LLC.

//! Error types for law checking

use thiserror::Error;

use crate::laws::LawKind;

/// Errors that can occur while checking laws
#[derive(Debug, Clone, Error)]
pub enum LawError {
    /// A sample produced different results along the two paths of a law
    #[error(
        "Law violation: {law} does not hold for {instance} at sample #{sample_index}{}",
        counterexample_suffix(.sample)
    )]
    Violation {
        /// The violated law
        law: LawKind,
        /// Name of the instance under test
        instance: String,
        /// Position of the offending sample in the sample stream
        sample_index: usize,
        /// Debug rendering of the counterexample, if recorded
        sample: Option<String>,
    },

    /// The sample stream was empty, so nothing was checked
    #[error("No samples supplied for {law} on {instance}")]
    NoSamples {
        /// The law that was to be checked
        law: LawKind,
        /// Name of the instance under test
        instance: String,
    },

    /// Configuration rejected by validation
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

fn counterexample_suffix(sample: &Option<String>) -> String {
    sample
        .as_ref()
        .map(|s| format!(": {s}"))
        .unwrap_or_default()
}

/// Result type for law checking
pub type LawResult<T> = Result<T, LawError>;

impl From<serde_json::Error> for LawError {
    fn from(err: serde_json::Error) -> Self {
        LawError::SerializationError(err.to_string())
    }
}

impl LawError {
    /// Whether this error reports a law violation, as opposed to a usage error
    pub fn is_violation(&self) -> bool {
        matches!(self, LawError::Violation { .. })
    }
}
