//! Threat Index Weights & Band Thresholds
//!
//! The fixed component weight table and the two band-threshold variants.
//! The variants genuinely disagree (medium/low cut points) and are kept as
//! two named configurations selected by the caller; do not unify them.

use super::types::RiskBand;

// ============================================================================
// COMPONENT WEIGHTS (fixed, sum to 100)
// ============================================================================

/// Display decomposition of the threat index. One number sliced five ways;
/// none of these rows is measured independently.
pub const COMPONENT_WEIGHTS: [(&str, u32); 5] = [
    ("ML confidence", 40),
    ("Explanation weight", 25),
    ("Availability signal", 15),
    ("Domain trust", 10),
    ("Transport security", 10),
];

// ============================================================================
// BAND THRESHOLDS
// ============================================================================

/// Inclusive lower bounds for each band, evaluated highest first.
///
/// No `Default`: every call site must pick `single_view` or `batch_view`
/// explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BandThresholds {
    pub critical_min: u32,
    pub high_min: u32,
    pub medium_min: u32,
    pub low_min: u32,
}

impl BandThresholds {
    /// Variant used by the single-URL analysis view
    pub fn single_view() -> Self {
        Self {
            critical_min: 80,
            high_min: 60,
            medium_min: 45,
            low_min: 25,
        }
    }

    /// Variant used by the batch analysis view
    pub fn batch_view() -> Self {
        Self {
            critical_min: 80,
            high_min: 60,
            medium_min: 40,
            low_min: 20,
        }
    }

    /// Map a score onto its band
    pub fn band_for(&self, score: u32) -> RiskBand {
        if score >= self.critical_min {
            RiskBand::Critical
        } else if score >= self.high_min {
            RiskBand::High
        } else if score >= self.medium_min {
            RiskBand::Medium
        } else if score >= self.low_min {
            RiskBand::Low
        } else {
            RiskBand::Minimal
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_view_bands() {
        let t = BandThresholds::single_view();
        assert_eq!(t.band_for(100), RiskBand::Critical);
        assert_eq!(t.band_for(80), RiskBand::Critical);
        assert_eq!(t.band_for(79), RiskBand::High);
        assert_eq!(t.band_for(60), RiskBand::High);
        assert_eq!(t.band_for(59), RiskBand::Medium);
        assert_eq!(t.band_for(45), RiskBand::Medium);
        assert_eq!(t.band_for(44), RiskBand::Low);
        assert_eq!(t.band_for(25), RiskBand::Low);
        assert_eq!(t.band_for(24), RiskBand::Minimal);
        assert_eq!(t.band_for(0), RiskBand::Minimal);
    }

    #[test]
    fn test_batch_view_bands() {
        let t = BandThresholds::batch_view();
        assert_eq!(t.band_for(80), RiskBand::Critical);
        assert_eq!(t.band_for(60), RiskBand::High);
        assert_eq!(t.band_for(40), RiskBand::Medium);
        assert_eq!(t.band_for(20), RiskBand::Low);
        assert_eq!(t.band_for(19), RiskBand::Minimal);
    }

    #[test]
    fn test_variants_diverge_between_cut_points() {
        // The same score lands in different bands depending on the view
        let a = BandThresholds::single_view();
        let b = BandThresholds::batch_view();
        assert_eq!(a.band_for(42), RiskBand::Low);
        assert_eq!(b.band_for(42), RiskBand::Medium);
        assert_eq!(a.band_for(22), RiskBand::Minimal);
        assert_eq!(b.band_for(22), RiskBand::Low);
    }

    #[test]
    fn test_component_weights_sum_to_100() {
        let sum: u32 = COMPONENT_WEIGHTS.iter().map(|(_, w)| w).sum();
        assert_eq!(sum, 100);
    }
}
