//! Domain Reputation Analysis
//!
//! Pre-fusion reputation stage: decides how much the hostname alone should
//! pull the model verdict, and resolves the verdict handed to fusion.
//! Trust boosts are positive, suspicion penalties negative, all in [-1, 1].

use url::Url;

use super::trust::{
    levenshtein, BRAND_AUTHORIZED_DOMAINS, HIGH_TRUST_DOMAINS, KEYWORD_PATTERNS, TRUSTED_TLDS,
};
use crate::logic::fusion::{ModelVerdict, VerdictLabel};
use crate::logic::model::ModelPrediction;

// ============================================================================
// BOOSTS & PENALTIES
// ============================================================================

pub const TRUSTED_TLD_BOOST: f64 = 0.4;
pub const EXACT_MATCH_BOOST: f64 = 0.3;
pub const SUBDOMAIN_BOOST: f64 = 0.2;
pub const KEYWORD_PENALTY: f64 = -0.3;
pub const MIMICRY_PENALTY: f64 = -0.9;
pub const TYPOSQUAT_PENALTY: f64 = -0.8;

/// Whitelist verdicts below this boost are advisory only
pub const WHITELIST_OVERRIDE_MIN_BOOST: f64 = 0.2;

/// Minimum confidence granted to a whitelisted legitimate verdict
pub const WHITELIST_CONFIDENCE_FLOOR: f64 = 0.8;

/// Minimum confidence granted to a lookalike phishing verdict
pub const LOOKALIKE_CONFIDENCE_FLOOR: f64 = 0.95;

/// Typosquatting is only checked on hostnames longer than this
const TYPOSQUAT_MIN_HOST_LEN: usize = 4;

/// Maximum edit distance still considered a lookalike
const TYPOSQUAT_MAX_DISTANCE: usize = 2;

// ============================================================================
// SIGNAL
// ============================================================================

/// Outcome of the hostname reputation pass
#[derive(Debug, Clone, PartialEq)]
pub struct DomainSignal {
    /// Hostname sits on the trust list (exact, parent, or trusted TLD)
    pub trusted: bool,
    /// Machine-readable reason tag, e.g. `exact_domain_match`
    pub reason: String,
    /// Confidence boost (positive) or penalty (negative)
    pub boost: f64,
}

impl DomainSignal {
    fn new(trusted: bool, reason: impl Into<String>, boost: f64) -> Self {
        Self {
            trusted,
            reason: reason.into(),
            boost,
        }
    }

    /// True when the reason marks a brand lookalike of either kind
    pub fn is_lookalike(&self) -> bool {
        self.reason.starts_with("brand_mimicry_detected")
            || self.reason.starts_with("typosquatting_detected")
    }
}

// ============================================================================
// ANALYSIS
// ============================================================================

/// Run the reputation pass over a URL's hostname.
///
/// Check order matters: trust signals win over suspicion signals, so a
/// trusted domain is never re-examined for keywords or lookalikes.
pub fn analyze_domain(url: &str) -> DomainSignal {
    let host = match extract_host(url) {
        Some(h) => h,
        None => return DomainSignal::new(false, "invalid_domain_format", 0.0),
    };

    // Trusted TLDs first - strongest signal
    for tld in TRUSTED_TLDS {
        if host.ends_with(tld) {
            return DomainSignal::new(true, format!("trusted_tld_{}", tld), TRUSTED_TLD_BOOST);
        }
    }

    // Exact trust-list member
    if HIGH_TRUST_DOMAINS.contains(host.as_str()) {
        return DomainSignal::new(true, "exact_domain_match", EXACT_MATCH_BOOST);
    }

    // Subdomain of a trusted parent (mail.google.com -> google.com)
    let parts: Vec<&str> = host.split('.').collect();
    if parts.len() > 2 {
        for i in 1..parts.len() {
            let parent = parts[i..].join(".");
            if HIGH_TRUST_DOMAINS.contains(parent.as_str()) {
                return DomainSignal::new(
                    true,
                    format!("subdomain_of_{}", parent),
                    SUBDOMAIN_BOOST,
                );
            }
        }
    }

    // Phishing keywords as whole words in the hostname
    for (keyword, pattern) in KEYWORD_PATTERNS.iter() {
        if pattern.is_match(&host) {
            return DomainSignal::new(
                false,
                format!("contains_phishing_keyword_{}", keyword),
                KEYWORD_PENALTY,
            );
        }
    }

    // Brand name present but hostname not authorized to carry it
    for (brand, authorized) in BRAND_AUTHORIZED_DOMAINS {
        if host.contains(brand) {
            let is_authorized = authorized
                .iter()
                .any(|allowed| host == *allowed || host.ends_with(&format!(".{}", allowed)));
            if !is_authorized {
                return DomainSignal::new(
                    false,
                    format!("brand_mimicry_detected_{}", brand),
                    MIMICRY_PENALTY,
                );
            }
        }
    }

    // Small edit distance from a trust-list domain
    if host.len() > TYPOSQUAT_MIN_HOST_LEN {
        for trusted in HIGH_TRUST_DOMAINS.iter() {
            if host.len().abs_diff(trusted.len()) > TYPOSQUAT_MAX_DISTANCE {
                continue;
            }
            let distance = levenshtein(&host, trusted);
            if distance > 0 && distance <= TYPOSQUAT_MAX_DISTANCE {
                return DomainSignal::new(
                    false,
                    format!("typosquatting_detected_target_{}", trusted),
                    TYPOSQUAT_PENALTY,
                );
            }
        }
    }

    DomainSignal::new(false, "not_whitelisted", 0.0)
}

/// Apply a trust boost or penalty to a raw model confidence.
///
/// A boost closes part of the gap to certainty, a penalty scales the
/// confidence down; both stay strictly inside (0, 1).
pub fn adjust_confidence(confidence: f64, boost: f64) -> f64 {
    if boost > 0.0 {
        (confidence + boost * (1.0 - confidence)).min(0.99)
    } else if boost < 0.0 {
        (confidence * (1.0 + boost)).max(0.01)
    } else {
        confidence
    }
}

/// Resolve the model verdict handed to fusion, applying the whitelist and
/// lookalike overrides. Returns the verdict plus the final reason tag.
pub fn resolve_model_verdict(
    prediction: &ModelPrediction,
    signal: &DomainSignal,
) -> (ModelVerdict, String) {
    let adjusted = adjust_confidence(prediction.confidence, signal.boost);

    if signal.trusted && signal.boost > WHITELIST_OVERRIDE_MIN_BOOST {
        // Strong whitelist signal. Only an extremely certain phishing model
        // verdict may override it.
        if prediction.legitimate_probability < 0.05 && prediction.phishing_probability > 0.95 {
            return (
                ModelVerdict::new(VerdictLabel::Phishing, prediction.phishing_probability),
                format!("{}_ml_overridden", signal.reason),
            );
        }
        return (
            ModelVerdict::new(
                VerdictLabel::Legitimate,
                adjusted.max(WHITELIST_CONFIDENCE_FLOOR),
            ),
            signal.reason.clone(),
        );
    }

    if signal.is_lookalike() {
        return (
            ModelVerdict::new(VerdictLabel::Phishing, adjusted.max(LOOKALIKE_CONFIDENCE_FLOOR)),
            signal.reason.clone(),
        );
    }

    (
        ModelVerdict::new(prediction.label, adjusted),
        signal.reason.clone(),
    )
}

/// Hostname for reputation purposes: lowercased, `www.` stripped, path
/// remnants cut off. Lenient on purpose - scheme-less input still yields a
/// host, mirroring how the reputation stage tolerates sloppy callers.
fn extract_host(url: &str) -> Option<String> {
    let lower = url.trim().to_lowercase();

    let mut host = match Url::parse(&lower) {
        Ok(parsed) => parsed.host_str()?.to_string(),
        Err(_) => lower.split('/').next().unwrap_or("").to_string(),
    };

    if let Some(stripped) = host.strip_prefix("www.") {
        host = stripped.to_string();
    }

    if host.is_empty() || !host.contains('.') {
        return None;
    }

    Some(host)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trusted_tld_wins() {
        let signal = analyze_domain("https://www.irs.gov/refund");
        assert!(signal.trusted);
        assert_eq!(signal.reason, "trusted_tld_.gov");
        assert!((signal.boost - TRUSTED_TLD_BOOST).abs() < 1e-9);
    }

    #[test]
    fn test_exact_trust_match() {
        let signal = analyze_domain("https://www.google.com");
        assert!(signal.trusted);
        assert_eq!(signal.reason, "exact_domain_match");
        assert!((signal.boost - EXACT_MATCH_BOOST).abs() < 1e-9);
    }

    #[test]
    fn test_subdomain_of_trusted_parent() {
        let signal = analyze_domain("https://mail.google.com/inbox");
        assert!(signal.trusted);
        assert_eq!(signal.reason, "subdomain_of_google.com");
        assert!((signal.boost - SUBDOMAIN_BOOST).abs() < 1e-9);
    }

    #[test]
    fn test_phishing_keyword_in_host() {
        let signal = analyze_domain("http://secure-login.example.com");
        assert!(!signal.trusted);
        assert!(signal.reason.starts_with("contains_phishing_keyword_"));
        assert!((signal.boost - KEYWORD_PENALTY).abs() < 1e-9);
    }

    #[test]
    fn test_brand_mimicry() {
        let signal = analyze_domain("http://accounts-google.com");
        assert_eq!(signal.reason, "brand_mimicry_detected_google");
        assert!((signal.boost - MIMICRY_PENALTY).abs() < 1e-9);
        assert!(signal.is_lookalike());
    }

    #[test]
    fn test_authorized_brand_subdomain_is_not_mimicry() {
        let signal = analyze_domain("https://drive.google.com/file");
        // subdomain check already trusts it before the brand pass
        assert!(signal.trusted);
    }

    #[test]
    fn test_typosquatting() {
        let signal = analyze_domain("http://gogle.com");
        assert_eq!(signal.reason, "typosquatting_detected_target_google.com");
        assert!((signal.boost - TYPOSQUAT_PENALTY).abs() < 1e-9);
        assert!(signal.is_lookalike());
    }

    #[test]
    fn test_unknown_domain_is_neutral() {
        let signal = analyze_domain("https://example-shop.net");
        assert!(!signal.trusted);
        assert_eq!(signal.reason, "not_whitelisted");
        assert_eq!(signal.boost, 0.0);
    }

    #[test]
    fn test_invalid_host() {
        let signal = analyze_domain("nonsense");
        assert_eq!(signal.reason, "invalid_domain_format");
    }

    #[test]
    fn test_adjust_confidence_boost_and_penalty() {
        // boost closes the gap to certainty
        assert!((adjust_confidence(0.6, 0.3) - 0.72).abs() < 1e-9);
        // penalty scales down
        assert!((adjust_confidence(0.6, -0.3) - 0.42).abs() < 1e-9);
        // neutral passes through
        assert_eq!(adjust_confidence(0.6, 0.0), 0.6);
        // ceilings and floors hold
        assert!(adjust_confidence(1.0, 0.4) <= 0.99);
        assert!(adjust_confidence(0.0, -0.9) >= 0.01);
    }

    #[test]
    fn test_resolve_whitelist_floor() {
        let prediction = ModelPrediction {
            label: VerdictLabel::Legitimate,
            confidence: 0.55,
            phishing_probability: 0.45,
            legitimate_probability: 0.55,
        };
        let signal = analyze_domain("https://www.google.com");
        let (verdict, reason) = resolve_model_verdict(&prediction, &signal);
        assert_eq!(verdict.label, VerdictLabel::Legitimate);
        assert!(verdict.confidence >= WHITELIST_CONFIDENCE_FLOOR);
        assert_eq!(reason, "exact_domain_match");
    }

    #[test]
    fn test_resolve_whitelist_overridden_by_certain_model() {
        let prediction = ModelPrediction {
            label: VerdictLabel::Phishing,
            confidence: 0.97,
            phishing_probability: 0.97,
            legitimate_probability: 0.03,
        };
        let signal = analyze_domain("https://www.google.com");
        let (verdict, reason) = resolve_model_verdict(&prediction, &signal);
        assert_eq!(verdict.label, VerdictLabel::Phishing);
        assert!((verdict.confidence - 0.97).abs() < 1e-9);
        assert!(reason.ends_with("_ml_overridden"));
    }

    #[test]
    fn test_resolve_lookalike_floor() {
        let prediction = ModelPrediction {
            label: VerdictLabel::Legitimate,
            confidence: 0.8,
            phishing_probability: 0.2,
            legitimate_probability: 0.8,
        };
        let signal = analyze_domain("http://paypal-prize.com");
        assert!(signal.is_lookalike());
        let (verdict, _) = resolve_model_verdict(&prediction, &signal);
        assert_eq!(verdict.label, VerdictLabel::Phishing);
        assert!(verdict.confidence >= LOOKALIKE_CONFIDENCE_FLOOR);
    }

    #[test]
    fn test_resolve_neutral_passes_adjusted_label_through() {
        let prediction = ModelPrediction {
            label: VerdictLabel::Phishing,
            confidence: 0.7,
            phishing_probability: 0.7,
            legitimate_probability: 0.3,
        };
        let signal = analyze_domain("https://example-shop.net");
        let (verdict, reason) = resolve_model_verdict(&prediction, &signal);
        assert_eq!(verdict.label, VerdictLabel::Phishing);
        assert!((verdict.confidence - 0.7).abs() < 1e-9);
        assert_eq!(reason, "not_whitelisted");
    }
}
