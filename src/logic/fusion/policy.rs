//! Confidence Fusion Policy
//!
//! Combines local lexical evidence with the model verdict. Strong local
//! phishing evidence erodes a legitimate model verdict and can flip it; a
//! phishing model verdict passes through untouched. That asymmetry is part
//! of the shipped behavior and is kept as-is.

use super::types::{FusedVerdict, ModelVerdict, VerdictLabel};
use crate::logic::lexical::ValidationResult;

// ============================================================================
// POLICY NUMBERS
// ============================================================================

/// Local score below which the model verdict is returned unchanged
pub const FUSION_SCORE_GATE: u32 = 40;

/// Local score scaling into the confidence boost
pub const BOOST_SCALE: f64 = 0.3;

/// Local evidence can shave at most this much off the model's confidence
pub const BOOST_CAP: f64 = 0.25;

/// Eroded legitimate confidence never drops below this
pub const LEGITIMATE_FLOOR: f64 = 0.1;

/// Below this adjusted legitimate confidence the label flips to phishing
pub const FLIP_THRESHOLD: f64 = 0.5;

/// Flipped phishing confidence is capped here
pub const CONFIDENCE_CEILING: f64 = 0.99;

/// Local score at which the caller should surface a pre-fusion advisory
pub const ADVISORY_SCORE: u32 = 80;

/// Fusion tuning, swappable per test
#[derive(Debug, Clone)]
pub struct FusionPolicy {
    pub score_gate: u32,
    pub boost_scale: f64,
    pub boost_cap: f64,
    pub legitimate_floor: f64,
    pub flip_threshold: f64,
    pub confidence_ceiling: f64,
}

impl Default for FusionPolicy {
    fn default() -> Self {
        Self {
            score_gate: FUSION_SCORE_GATE,
            boost_scale: BOOST_SCALE,
            boost_cap: BOOST_CAP,
            legitimate_floor: LEGITIMATE_FLOOR,
            flip_threshold: FLIP_THRESHOLD,
            confidence_ceiling: CONFIDENCE_CEILING,
        }
    }
}

// ============================================================================
// FUSION
// ============================================================================

/// Fuse with the default policy.
pub fn fuse(validation: &ValidationResult, model: ModelVerdict) -> FusedVerdict {
    fuse_with_policy(validation, model, &FusionPolicy::default())
}

/// Fuse local evidence with the model verdict.
///
/// Pure and total. When local evidence clears the gate and the model says
/// legitimate, the model confidence is eroded by up to `boost_cap`; if the
/// eroded value falls under `flip_threshold` the label flips and the
/// residual legitimate probability is re-expressed as a phishing
/// probability, so the returned confidence always describes the returned
/// label.
pub fn fuse_with_policy(
    validation: &ValidationResult,
    model: ModelVerdict,
    policy: &FusionPolicy,
) -> FusedVerdict {
    if !validation.is_phishing || validation.score < policy.score_gate {
        return model.into();
    }

    let boost = (validation.score as f64 / 100.0 * policy.boost_scale).min(policy.boost_cap);

    match model.label {
        VerdictLabel::Legitimate => {
            let adjusted = (model.confidence - boost).max(policy.legitimate_floor);
            if adjusted < policy.flip_threshold {
                FusedVerdict {
                    label: VerdictLabel::Phishing,
                    confidence: (1.0 - adjusted).min(policy.confidence_ceiling),
                }
            } else {
                FusedVerdict {
                    label: VerdictLabel::Legitimate,
                    confidence: adjusted,
                }
            }
        }
        // Already-phishing verdicts are not reinforced by local evidence.
        VerdictLabel::Phishing => model.into(),
    }
}
