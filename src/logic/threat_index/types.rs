//! Threat Index Types
//!
//! Display-facing types for the composed 0-100 threat index.

use serde::{Deserialize, Serialize};

// ============================================================================
// RISK BAND
// ============================================================================

/// Discrete risk category mapped from the threat index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskBand {
    Minimal,
    Low,
    Medium,
    High,
    Critical,
}

impl RiskBand {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskBand::Minimal => "minimal",
            RiskBand::Low => "low",
            RiskBand::Medium => "medium",
            RiskBand::High => "high",
            RiskBand::Critical => "critical",
        }
    }

    /// UI accent color for this band
    pub fn color(&self) -> &'static str {
        match self {
            RiskBand::Minimal => "#10b981",  // Green
            RiskBand::Low => "#84cc16",      // Lime
            RiskBand::Medium => "#f59e0b",   // Yellow
            RiskBand::High => "#f97316",     // Orange
            RiskBand::Critical => "#ef4444", // Red
        }
    }
}

impl std::fmt::Display for RiskBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// COMPONENT BREAKDOWN
// ============================================================================

/// One weighted display row of the threat index.
///
/// `display_value` is `score * weight_percent / 100` - a slice of the single
/// composed score, not an independent measurement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    pub label: String,
    pub weight_percent: u32,
    pub display_value: f64,
}

// ============================================================================
// THREAT INDEX
// ============================================================================

/// The composed 0-100 display score with its band and breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThreatIndex {
    pub score: u32,
    pub band: RiskBand,
    pub components: Vec<Component>,
}
