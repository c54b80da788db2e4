//! Verdict Types
//!
//! The two-class verdict vocabulary shared by the model boundary and the
//! fusion policy.

use serde::{Deserialize, Serialize};

/// Binary URL classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerdictLabel {
    Phishing,
    Legitimate,
}

impl VerdictLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            VerdictLabel::Phishing => "phishing",
            VerdictLabel::Legitimate => "legitimate",
        }
    }
}

impl std::fmt::Display for VerdictLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Verdict as delivered by the prediction service. Read-only input here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelVerdict {
    pub label: VerdictLabel,
    /// Probability that `label` is correct, in [0, 1]
    pub confidence: f64,
}

impl ModelVerdict {
    pub fn new(label: VerdictLabel, confidence: f64) -> Self {
        Self { label, confidence }
    }
}

/// Verdict after fusion with local lexical evidence.
///
/// Invariant: `confidence` is always the probability of THIS `label`, never
/// of the opposite class - a flipped label re-expresses the residual
/// probability accordingly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FusedVerdict {
    pub label: VerdictLabel,
    pub confidence: f64,
}

impl From<ModelVerdict> for FusedVerdict {
    fn from(v: ModelVerdict) -> Self {
        Self {
            label: v.label,
            confidence: v.confidence,
        }
    }
}
