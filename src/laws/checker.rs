// Copyright 2025 Cowboy AI, LLC.

//! Sampled law checking
//!
//! The [`LawChecker`] drives a law predicate over a stream of sample values
//! and records what it saw. A passing check means no counterexample was found
//! among the samples drawn; it is evidence, not a proof.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::LawCheckConfig;
use crate::errors::{LawError, LawResult};

/// The layer of the structure hierarchy a law belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Structure {
    /// Identity and associativity of composition
    Category,
    /// Functoriality of the tensor
    Bifunctor,
    /// Unitors, associator, triangle and pentagon
    Monoidal,
    /// Braiding coherence
    Braided,
    /// Self-inverse braiding
    Symmetric,
}

/// Every law the crate knows how to check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LawKind {
    /// `id ∘ f == f`
    LeftIdentity,
    /// `f ∘ id == f`
    RightIdentity,
    /// `(f ∘ g) ∘ h == f ∘ (g ∘ h)`
    Associativity,
    /// `bimap(id, id) == id`
    BimapIdentity,
    /// `bimap(f2, g2) ∘ bimap(f1, g1) == bimap(f2 ∘ f1, g2 ∘ g1)`
    BimapComposition,
    /// `ρ⁻¹ ∘ ρ == id`
    RightUnitorIso,
    /// `ρ ∘ ρ⁻¹ == id`
    RightUnitorSection,
    /// `λ⁻¹ ∘ λ == id`
    LeftUnitorIso,
    /// `λ ∘ λ⁻¹ == id`
    LeftUnitorSection,
    /// `α⁻¹ ∘ α == id`
    AssociatorIso,
    /// `α ∘ α⁻¹ == id`
    AssociatorInvIso,
    /// Naturality of λ
    LeftUnitorNaturality,
    /// Naturality of ρ
    RightUnitorNaturality,
    /// Naturality of α
    AssociatorNaturality,
    /// Triangle coherence
    Triangle,
    /// Pentagon coherence
    Pentagon,
    /// Hexagon from `(A ⊗ B) ⊗ C`
    HexagonLeft,
    /// Hexagon from `A ⊗ (B ⊗ C)`
    HexagonRight,
    /// Naturality of σ
    BraidingNaturality,
    /// `σ ∘ σ == id`
    Involution,
}

impl LawKind {
    /// All laws, ordered by structure layer
    pub fn all() -> &'static [LawKind] {
        use LawKind::*;
        &[
            LeftIdentity,
            RightIdentity,
            Associativity,
            BimapIdentity,
            BimapComposition,
            RightUnitorIso,
            RightUnitorSection,
            LeftUnitorIso,
            LeftUnitorSection,
            AssociatorIso,
            AssociatorInvIso,
            LeftUnitorNaturality,
            RightUnitorNaturality,
            AssociatorNaturality,
            Triangle,
            Pentagon,
            HexagonLeft,
            HexagonRight,
            BraidingNaturality,
            Involution,
        ]
    }

    /// The laws introduced by one layer of the hierarchy
    pub fn for_structure(structure: Structure) -> Vec<LawKind> {
        Self::all()
            .iter()
            .copied()
            .filter(|law| law.structure() == structure)
            .collect()
    }

    /// Stable snake_case name
    pub fn name(&self) -> &'static str {
        match self {
            LawKind::LeftIdentity => "left_identity",
            LawKind::RightIdentity => "right_identity",
            LawKind::Associativity => "associativity",
            LawKind::BimapIdentity => "bimap_identity",
            LawKind::BimapComposition => "bimap_composition",
            LawKind::RightUnitorIso => "right_unitor_iso",
            LawKind::RightUnitorSection => "right_unitor_section",
            LawKind::LeftUnitorIso => "left_unitor_iso",
            LawKind::LeftUnitorSection => "left_unitor_section",
            LawKind::AssociatorIso => "associator_iso",
            LawKind::AssociatorInvIso => "associator_inv_iso",
            LawKind::LeftUnitorNaturality => "left_unitor_naturality",
            LawKind::RightUnitorNaturality => "right_unitor_naturality",
            LawKind::AssociatorNaturality => "associator_naturality",
            LawKind::Triangle => "triangle",
            LawKind::Pentagon => "pentagon",
            LawKind::HexagonLeft => "hexagon_left",
            LawKind::HexagonRight => "hexagon_right",
            LawKind::BraidingNaturality => "braiding_naturality",
            LawKind::Involution => "involution",
        }
    }

    /// The layer that introduces this law
    pub fn structure(&self) -> Structure {
        match self {
            LawKind::LeftIdentity | LawKind::RightIdentity | LawKind::Associativity => {
                Structure::Category
            }
            LawKind::BimapIdentity | LawKind::BimapComposition => Structure::Bifunctor,
            LawKind::HexagonLeft | LawKind::HexagonRight | LawKind::BraidingNaturality => {
                Structure::Braided
            }
            LawKind::Involution => Structure::Symmetric,
            _ => Structure::Monoidal,
        }
    }
}

impl fmt::Display for LawKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// A sample on which a law failed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LawViolation {
    /// Which law was violated
    pub law: LawKind,

    /// Instance under test
    pub instance: String,

    /// Position of the sample in the stream
    pub sample_index: usize,

    /// Debug rendering of the sample, when recording is enabled
    pub sample: Option<String>,
}

impl From<LawViolation> for LawError {
    fn from(violation: LawViolation) -> Self {
        LawError::Violation {
            law: violation.law,
            instance: violation.instance,
            sample_index: violation.sample_index,
            sample: violation.sample,
        }
    }
}

/// Result of checking one law against one instance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LawCheckResult {
    /// The law checked
    pub law: LawKind,

    /// Instance under test
    pub instance: String,

    /// Whether every sample satisfied the law
    pub satisfied: bool,

    /// Number of samples the predicate ran on
    pub samples_checked: usize,

    /// Number of failing samples seen, including ones not recorded
    pub violation_count: usize,

    /// Stream position of the first failing sample, recorded or not
    pub first_violation_index: Option<usize>,

    /// Recorded counterexamples
    pub violations: Vec<LawViolation>,

    /// Timestamp of the check
    pub checked_at: DateTime<Utc>,
}

impl LawCheckResult {
    /// Turn an unsatisfied result into [`LawError::Violation`] for the first
    /// counterexample
    pub fn into_result(self) -> LawResult<Self> {
        if self.satisfied {
            return Ok(self);
        }
        let first_index = self.first_violation_index.unwrap_or_default();
        match self.violations.into_iter().next() {
            Some(violation) if violation.sample_index == first_index => Err(violation.into()),
            _ => Err(LawError::Violation {
                law: self.law,
                instance: self.instance,
                sample_index: first_index,
                sample: None,
            }),
        }
    }
}

/// Runs law predicates over sample streams and keeps a history of results
pub struct LawChecker {
    config: LawCheckConfig,
    history: Vec<LawCheckResult>,
}

impl LawChecker {
    /// Create a checker after validating its configuration
    pub fn new(config: LawCheckConfig) -> LawResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            history: Vec::new(),
        })
    }

    /// Configuration in use
    pub fn config(&self) -> &LawCheckConfig {
        &self.config
    }

    /// Check `law` for `instance` by running `predicate` on each sample
    ///
    /// Draws at most `sample_count` samples. Returns `Err(NoSamples)` if the
    /// stream is empty; a failing law is reported through the returned
    /// result, never as an error. Samples are only rendered with `Debug`
    /// once they fail.
    pub fn check<S, I, P>(
        &mut self,
        instance: &str,
        law: LawKind,
        samples: I,
        predicate: P,
    ) -> LawResult<LawCheckResult>
    where
        S: fmt::Debug,
        I: IntoIterator<Item = S>,
        P: Fn(&S) -> bool,
    {
        debug!(%law, instance, limit = self.config.sample_count, "Checking law");

        let mut samples_checked = 0;
        let mut violation_count = 0;
        let mut first_violation_index = None;
        let mut violations = Vec::new();

        for (sample_index, sample) in samples
            .into_iter()
            .take(self.config.sample_count)
            .enumerate()
        {
            samples_checked += 1;
            if predicate(&sample) {
                continue;
            }

            violation_count += 1;
            first_violation_index.get_or_insert(sample_index);
            let rendered = self
                .config
                .record_counterexamples
                .then(|| format!("{sample:?}"));
            warn!(
                %law,
                instance,
                sample_index,
                sample = rendered.as_deref().unwrap_or("<not recorded>"),
                "Law violated"
            );
            if violations.len() < self.config.max_recorded_violations {
                violations.push(LawViolation {
                    law,
                    instance: instance.to_string(),
                    sample_index,
                    sample: rendered,
                });
            }
            if self.config.stop_on_first_violation {
                break;
            }
        }

        if samples_checked == 0 {
            return Err(LawError::NoSamples {
                law,
                instance: instance.to_string(),
            });
        }

        let result = LawCheckResult {
            law,
            instance: instance.to_string(),
            satisfied: violation_count == 0,
            samples_checked,
            violation_count,
            first_violation_index,
            violations,
            checked_at: Utc::now(),
        };
        info!(
            %law,
            instance,
            samples_checked,
            violation_count,
            satisfied = result.satisfied,
            "Law check complete"
        );

        self.history.push(result.clone());
        Ok(result)
    }

    /// All results so far, oldest first
    pub fn history(&self) -> &[LawCheckResult] {
        &self.history
    }

    /// Every recorded counterexample across the history
    pub fn violations(&self) -> Vec<&LawViolation> {
        self.history
            .iter()
            .flat_map(|result| &result.violations)
            .collect()
    }

    /// Results for one instance
    pub fn results_for(&self, instance: &str) -> Vec<&LawCheckResult> {
        self.history
            .iter()
            .filter(|result| result.instance == instance)
            .collect()
    }

    /// Whether every check so far was satisfied
    pub fn all_satisfied(&self) -> bool {
        self.history.iter().all(|result| result.satisfied)
    }

    /// Serialize the history as pretty-printed JSON
    pub fn report_json(&self) -> LawResult<String> {
        Ok(serde_json::to_string_pretty(&self.history)?)
    }

    /// Clear history
    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}

impl Default for LawChecker {
    fn default() -> Self {
        Self {
            config: LawCheckConfig::default(),
            history: Vec::new(),
        }
    }
}
