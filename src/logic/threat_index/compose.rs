//! Threat Index Composer
//!
//! Final pipeline stage: render one fused verdict as a 0-100 display score,
//! band it, and slice it into the fixed-weight component rows.

use super::rules::{BandThresholds, COMPONENT_WEIGHTS};
use super::types::{Component, ThreatIndex};
use crate::logic::fusion::{FusedVerdict, VerdictLabel};

/// Compose the display index for a fused verdict.
///
/// A phishing verdict maps its confidence straight onto the 0-100 scale; a
/// legitimate verdict maps the residual phishing probability. The component
/// rows are a presentation-only decomposition of that single number - they
/// carry no independent signal, and wiring live measurements into them
/// means revisiting the fusion scale contract first.
pub fn compose(fused: FusedVerdict, thresholds: &BandThresholds) -> ThreatIndex {
    let raw = match fused.label {
        VerdictLabel::Phishing => fused.confidence * 100.0,
        VerdictLabel::Legitimate => (1.0 - fused.confidence) * 100.0,
    };
    let score = raw.round().clamp(0.0, 100.0) as u32;

    let components = COMPONENT_WEIGHTS
        .iter()
        .map(|(label, weight)| Component {
            label: (*label).to_string(),
            weight_percent: *weight,
            display_value: score as f64 * *weight as f64 / 100.0,
        })
        .collect();

    ThreatIndex {
        score,
        band: thresholds.band_for(score),
        components,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::threat_index::types::RiskBand;

    #[test]
    fn test_phishing_confidence_maps_directly() {
        let fused = FusedVerdict {
            label: VerdictLabel::Phishing,
            confidence: 0.9,
        };
        let index = compose(fused, &BandThresholds::single_view());
        assert_eq!(index.score, 90);
        assert_eq!(index.band, RiskBand::Critical);
    }

    #[test]
    fn test_legitimate_confidence_maps_to_residual() {
        let fused = FusedVerdict {
            label: VerdictLabel::Legitimate,
            confidence: 0.97,
        };
        let index = compose(fused, &BandThresholds::single_view());
        assert_eq!(index.score, 3);
        assert_eq!(index.band, RiskBand::Minimal);
    }

    #[test]
    fn test_rounding_not_truncation() {
        let fused = FusedVerdict {
            label: VerdictLabel::Phishing,
            confidence: 0.535,
        };
        let index = compose(fused, &BandThresholds::single_view());
        assert_eq!(index.score, 54);
    }

    #[test]
    fn test_components_slice_the_score() {
        let fused = FusedVerdict {
            label: VerdictLabel::Phishing,
            confidence: 0.8,
        };
        let index = compose(fused, &BandThresholds::batch_view());
        assert_eq!(index.components.len(), 5);

        let total: f64 = index.components.iter().map(|c| c.display_value).sum();
        assert!((total - index.score as f64).abs() < 1e-9);

        let ml = &index.components[0];
        assert_eq!(ml.label, "ML confidence");
        assert_eq!(ml.weight_percent, 40);
        assert!((ml.display_value - 32.0).abs() < 1e-9);
    }

    #[test]
    fn test_compose_is_idempotent_on_equal_inputs() {
        let fused = FusedVerdict {
            label: VerdictLabel::Phishing,
            confidence: 0.73,
        };
        let a = compose(fused, &BandThresholds::single_view());
        let b = compose(fused, &BandThresholds::single_view());
        assert_eq!(a, b);
    }

    #[test]
    fn test_score_stays_in_bounds() {
        for conf in [0.0, 0.25, 0.5, 0.75, 1.0] {
            for label in [VerdictLabel::Phishing, VerdictLabel::Legitimate] {
                let index = compose(
                    FusedVerdict {
                        label,
                        confidence: conf,
                    },
                    &BandThresholds::batch_view(),
                );
                assert!(index.score <= 100);
            }
        }
    }
}
