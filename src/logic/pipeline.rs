//! Analysis Pipeline
//!
//! Orchestrates one URL through the full chain: lexical rule engine,
//! domain reputation, model verdict resolution, confidence fusion, threat
//! index composition, attack classification, and summary. Everything except
//! the model call is pure; `assess_url` is the deterministic core and
//! `analyze_url` the async wrapper around it.

use serde::Serialize;
use uuid::Uuid;

use crate::logic::attack;
use crate::logic::domain_intel;
use crate::logic::fusion::{self, VerdictLabel};
use crate::logic::lexical::{self, Issue};
use crate::logic::model::{ModelClient, ModelError, ModelPrediction};
use crate::logic::summary;
use crate::logic::threat_index::{self, BandThresholds, ThreatIndex};

// ============================================================================
// RISK LEVEL
// ============================================================================

/// Two-sided risk ladder keyed on the final label and confidence.
///
/// Phishing verdicts grade downward from critical; legitimate verdicts grade
/// from very_low up to warning as confidence erodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Critical,
    High,
    Medium,
    Low,
    VeryLow,
    Caution,
    Warning,
}

impl RiskLevel {
    pub fn from_verdict(label: VerdictLabel, confidence: f64) -> Self {
        match label {
            VerdictLabel::Phishing => {
                if confidence >= 0.90 {
                    RiskLevel::Critical
                } else if confidence >= 0.75 {
                    RiskLevel::High
                } else if confidence >= 0.60 {
                    RiskLevel::Medium
                } else {
                    RiskLevel::Low
                }
            }
            VerdictLabel::Legitimate => {
                if confidence >= 0.95 {
                    RiskLevel::VeryLow
                } else if confidence >= 0.85 {
                    RiskLevel::Low
                } else if confidence >= 0.70 {
                    RiskLevel::Caution
                } else {
                    RiskLevel::Warning
                }
            }
        }
    }
}

// ============================================================================
// ASSESSMENT
// ============================================================================

/// Deterministic outcome of one URL assessment
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assessment {
    pub url: String,
    pub prediction: VerdictLabel,
    pub confidence: f64,
    pub phishing_probability: f64,
    pub legitimate_probability: f64,
    pub risk_level: RiskLevel,
    pub threat: ThreatIndex,
    pub findings: Vec<Issue>,
    pub local_score: u32,
    pub domain_reason: String,
    pub attack_type: Option<String>,
    pub summary: String,
    /// Local evidence alone crossed the advisory line before fusion ran
    pub advisory: bool,
}

/// Full API report: the assessment plus request metadata
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    #[serde(flatten)]
    pub assessment: Assessment,
    pub request_id: Uuid,
    pub processing_ms: u64,
    pub timestamp: String,
}

/// Run the pure assessment chain for one URL and an already-obtained model
/// prediction.
pub fn assess_url(
    url: &str,
    prediction: &ModelPrediction,
    thresholds: &BandThresholds,
) -> Assessment {
    let validation = lexical::evaluate(url);
    let signal = domain_intel::analyze_domain(url);
    let (model_verdict, domain_reason) = domain_intel::resolve_model_verdict(prediction, &signal);

    // Pre-fusion advisory: strong local evidence is flagged before the
    // final verdict exists, matching the early warning the UI shows.
    let advisory = validation.score >= fusion::ADVISORY_SCORE;

    let fused = fusion::fuse(&validation, model_verdict);
    let threat = threat_index::compose(fused, thresholds);
    let risk_level = RiskLevel::from_verdict(fused.label, fused.confidence);

    let attack_type = (fused.label == VerdictLabel::Phishing)
        .then(|| attack::classify_attack_type(url).label().to_string());

    let summary = summary::generate_summary(&fused, &validation, &signal);

    Assessment {
        url: url.to_string(),
        prediction: fused.label,
        confidence: fused.confidence,
        phishing_probability: prediction.phishing_probability,
        legitimate_probability: prediction.legitimate_probability,
        risk_level,
        threat,
        local_score: validation.score,
        findings: validation.issues,
        domain_reason,
        attack_type,
        summary,
        advisory,
    }
}

/// Analyze one URL end to end: fetch the model verdict, then run the pure
/// chain and wrap it with request metadata.
pub async fn analyze_url(
    client: &ModelClient,
    url: &str,
    thresholds: &BandThresholds,
) -> Result<AnalysisReport, ModelError> {
    let started = std::time::Instant::now();

    let prediction = client.predict(url).await?;
    let assessment = assess_url(url, &prediction, thresholds);

    tracing::info!(
        url = %assessment.url,
        prediction = assessment.prediction.as_str(),
        threat_index = assessment.threat.score,
        band = assessment.threat.band.as_str(),
        "analysis complete"
    );

    Ok(AnalysisReport {
        assessment,
        request_id: Uuid::new_v4(),
        processing_ms: started.elapsed().as_millis() as u64,
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}
