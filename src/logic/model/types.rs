//! Prediction Service Types
//!
//! Wire DTOs for the remote prediction service and the typed errors of that
//! boundary. The service also reports per-feature contributions; those
//! belong to the explanation consumer and are dropped here.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::logic::fusion::VerdictLabel;

// ============================================================================
// WIRE FORMAT
// ============================================================================

#[derive(Debug, Serialize)]
pub struct PredictRequest {
    pub url: String,
}

/// Raw response body of `POST /predict`
#[derive(Debug, Deserialize)]
pub struct PredictResponse {
    pub label: String,
    pub confidence: f64,
    #[serde(default)]
    pub phishing_probability: Option<f64>,
    #[serde(default)]
    pub legitimate_probability: Option<f64>,
    /// Consumed by the explanation view, not by fusion
    #[serde(default)]
    pub feature_contributions: Option<Vec<serde_json::Value>>,
}

// ============================================================================
// PREDICTION
// ============================================================================

/// Validated prediction as the pipeline consumes it.
///
/// All probabilities are clamped into [0, 1] here, at the integration
/// boundary - the pure core downstream assumes in-range inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelPrediction {
    pub label: VerdictLabel,
    pub confidence: f64,
    pub phishing_probability: f64,
    pub legitimate_probability: f64,
}

impl ModelPrediction {
    /// Validate and clamp a wire response.
    pub fn from_wire(wire: PredictResponse) -> Result<Self, ModelError> {
        let label = match wire.label.to_lowercase().as_str() {
            "phishing" => VerdictLabel::Phishing,
            "legitimate" => VerdictLabel::Legitimate,
            other => {
                return Err(ModelError::Protocol(format!(
                    "unknown label '{}'",
                    other
                )))
            }
        };

        let confidence = clamp01(wire.confidence);
        let phishing_probability = wire
            .phishing_probability
            .map(clamp01)
            .unwrap_or(match label {
                VerdictLabel::Phishing => confidence,
                VerdictLabel::Legitimate => 1.0 - confidence,
            });
        let legitimate_probability = wire
            .legitimate_probability
            .map(clamp01)
            .unwrap_or(1.0 - phishing_probability);

        Ok(Self {
            label,
            confidence,
            phishing_probability,
            legitimate_probability,
        })
    }
}

fn clamp01(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

// ============================================================================
// ERRORS
// ============================================================================

/// Prediction service boundary errors
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("prediction service request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("prediction service returned status {0}")]
    Status(u16),

    #[error("prediction service protocol error: {0}")]
    Protocol(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wire(label: &str, confidence: f64) -> PredictResponse {
        PredictResponse {
            label: label.to_string(),
            confidence,
            phishing_probability: None,
            legitimate_probability: None,
            feature_contributions: None,
        }
    }

    #[test]
    fn test_labels_parse_case_insensitively() {
        let p = ModelPrediction::from_wire(wire("Phishing", 0.9)).unwrap();
        assert_eq!(p.label, VerdictLabel::Phishing);
        let p = ModelPrediction::from_wire(wire("legitimate", 0.8)).unwrap();
        assert_eq!(p.label, VerdictLabel::Legitimate);
    }

    #[test]
    fn test_unknown_label_is_protocol_error() {
        let err = ModelPrediction::from_wire(wire("malware", 0.9)).unwrap_err();
        assert!(matches!(err, ModelError::Protocol(_)));
    }

    #[test]
    fn test_out_of_range_confidence_is_clamped() {
        let p = ModelPrediction::from_wire(wire("phishing", 1.7)).unwrap();
        assert_eq!(p.confidence, 1.0);
        let p = ModelPrediction::from_wire(wire("phishing", -0.2)).unwrap();
        assert_eq!(p.confidence, 0.0);
        let p = ModelPrediction::from_wire(wire("phishing", f64::NAN)).unwrap();
        assert_eq!(p.confidence, 0.0);
    }

    #[test]
    fn test_missing_probabilities_are_derived() {
        let p = ModelPrediction::from_wire(wire("legitimate", 0.7)).unwrap();
        assert!((p.phishing_probability - 0.3).abs() < 1e-9);
        assert!((p.legitimate_probability - 0.7).abs() < 1e-9);
    }

    #[test]
    fn test_explicit_probabilities_pass_clamped() {
        let p = ModelPrediction::from_wire(PredictResponse {
            label: "phishing".to_string(),
            confidence: 0.95,
            phishing_probability: Some(1.4),
            legitimate_probability: Some(-0.1),
            feature_contributions: None,
        })
        .unwrap();
        assert_eq!(p.phishing_probability, 1.0);
        assert_eq!(p.legitimate_probability, 0.0);
    }
}
