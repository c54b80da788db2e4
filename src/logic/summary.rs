//! Verdict Summary
//!
//! Deterministic plain-text summary of an analysis: verdict, risk factors
//! from the triggered findings, trust context, and a recommendation block
//! keyed on confidence tiers.

use crate::logic::domain_intel::DomainSignal;
use crate::logic::fusion::{FusedVerdict, VerdictLabel};
use crate::logic::lexical::ValidationResult;

/// At most this many risk-factor lines are listed
const MAX_RISK_FACTORS: usize = 5;

/// Build the human-readable summary for a finished analysis.
pub fn generate_summary(
    fused: &FusedVerdict,
    validation: &ValidationResult,
    signal: &DomainSignal,
) -> String {
    let mut parts: Vec<String> = Vec::new();

    match fused.label {
        VerdictLabel::Phishing => parts.push(format!(
            "PHISHING DETECTED (confidence: {:.1}%)",
            fused.confidence * 100.0
        )),
        VerdictLabel::Legitimate => parts.push(format!(
            "Appears legitimate (confidence: {:.1}%)",
            fused.confidence * 100.0
        )),
    }

    if signal.trusted {
        parts.push(format!(
            "Recognized as a trusted domain (trust boost: +{:.0}%).",
            signal.boost * 100.0
        ));
    }

    if validation.issues.is_empty() {
        if fused.label == VerdictLabel::Legitimate {
            parts.push("No structural risk factors detected.".to_string());
        }
    } else {
        parts.push("Risk factors:".to_string());
        for issue in validation.issues.iter().take(MAX_RISK_FACTORS) {
            parts.push(format!("- {}: {}", issue.title, issue.description));
        }
    }

    match fused.label {
        VerdictLabel::Phishing => {
            if fused.confidence >= 0.90 {
                parts.push(
                    "Recommendation: do not proceed. This URL is highly likely to be a \
                     phishing site designed to steal credentials."
                        .to_string(),
                );
            } else if fused.confidence >= 0.75 {
                parts.push(
                    "Recommendation: extreme caution advised. This URL exhibits multiple \
                     phishing characteristics; avoid entering sensitive data."
                        .to_string(),
                );
            } else {
                parts.push(
                    "Recommendation: treat as suspicious and verify through official channels."
                        .to_string(),
                );
            }
        }
        VerdictLabel::Legitimate => {
            if fused.confidence >= 0.95 {
                parts.push(
                    "Recommendation: appears safe. Normal browsing precautions apply.".to_string(),
                );
            } else {
                parts.push("Recommendation: probably safe, but remain vigilant.".to_string());
            }
        }
    }

    if fused.confidence < 0.7 {
        parts.push("Note: low confidence verdict. Verify through other means.".to_string());
    }

    if signal.trusted && fused.label == VerdictLabel::Phishing {
        parts.push(
            "Important: despite the known domain, this specific URL shows phishing \
             characteristics."
                .to_string(),
        );
    }

    parts.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::lexical::{evaluate, PHISHING_SCORE_THRESHOLD};

    fn neutral_signal() -> DomainSignal {
        DomainSignal {
            trusted: false,
            reason: "not_whitelisted".to_string(),
            boost: 0.0,
        }
    }

    #[test]
    fn test_phishing_summary_lists_findings() {
        let validation = evaluate("http://paypal-secure.com");
        let fused = FusedVerdict {
            label: VerdictLabel::Phishing,
            confidence: 0.92,
        };
        let text = generate_summary(&fused, &validation, &neutral_signal());
        assert!(text.starts_with("PHISHING DETECTED (confidence: 92.0%)"));
        assert!(text.contains("Risk factors:"));
        assert!(text.contains("Brand Look-alike Domain"));
        assert!(text.contains("do not proceed"));
    }

    #[test]
    fn test_clean_legitimate_summary() {
        let validation = evaluate("https://www.google.com");
        let fused = FusedVerdict {
            label: VerdictLabel::Legitimate,
            confidence: 0.97,
        };
        let signal = DomainSignal {
            trusted: true,
            reason: "exact_domain_match".to_string(),
            boost: 0.3,
        };
        let text = generate_summary(&fused, &validation, &signal);
        assert!(text.contains("Appears legitimate"));
        assert!(text.contains("trusted domain"));
        assert!(text.contains("No structural risk factors detected."));
        assert!(text.contains("Normal browsing precautions"));
    }

    #[test]
    fn test_low_confidence_note() {
        let validation =
            crate::logic::lexical::ValidationResult::from_issues(vec![], PHISHING_SCORE_THRESHOLD);
        let fused = FusedVerdict {
            label: VerdictLabel::Legitimate,
            confidence: 0.55,
        };
        let text = generate_summary(&fused, &validation, &neutral_signal());
        assert!(text.contains("low confidence"));
        assert!(text.contains("remain vigilant"));
    }

    #[test]
    fn test_trusted_domain_phishing_caveat() {
        let validation = evaluate("http://mail.google.com");
        let fused = FusedVerdict {
            label: VerdictLabel::Phishing,
            confidence: 0.8,
        };
        let signal = DomainSignal {
            trusted: true,
            reason: "subdomain_of_google.com".to_string(),
            boost: 0.2,
        };
        let text = generate_summary(&fused, &validation, &signal);
        assert!(text.contains("despite the known domain"));
    }

    #[test]
    fn test_summary_is_deterministic() {
        let validation = evaluate("http://192.168.1.5/login");
        let fused = FusedVerdict {
            label: VerdictLabel::Phishing,
            confidence: 0.535,
        };
        let a = generate_summary(&fused, &validation, &neutral_signal());
        let b = generate_summary(&fused, &validation, &neutral_signal());
        assert_eq!(a, b);
    }
}
