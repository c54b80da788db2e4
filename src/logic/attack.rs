//! Attack Pattern Classifier
//!
//! Keyword classification of phishing URLs into attack categories. First
//! matching group wins; only attached to reports whose final label is
//! phishing.

use serde::{Deserialize, Serialize};

const CREDENTIAL_KEYWORDS: [&str; 5] = ["login", "signin", "account", "verify", "confirm"];
const IMPERSONATED_BRANDS: [&str; 5] = ["paypal", "amazon", "google", "facebook", "microsoft"];
const PAYMENT_KEYWORDS: [&str; 4] = ["payment", "invoice", "billing", "checkout"];
const PRIZE_KEYWORDS: [&str; 5] = ["prize", "winner", "congratulations", "survey", "reward"];
const DROPPER_KEYWORDS: [&str; 4] = ["download", "update", "install", "setup"];

/// Category of a phishing attack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttackType {
    BrandImpersonation,
    CredentialHarvesting,
    PaymentScam,
    SurveyScam,
    MalwareDropper,
    Generic,
}

impl AttackType {
    /// Display label for reports
    pub fn label(&self) -> &'static str {
        match self {
            AttackType::BrandImpersonation => "Brand Impersonation (Credential Harvesting)",
            AttackType::CredentialHarvesting => "Credential Harvesting",
            AttackType::PaymentScam => "Payment Scam",
            AttackType::SurveyScam => "Survey/Prize Scam",
            AttackType::MalwareDropper => "Malware Dropper",
            AttackType::Generic => "Generic Phishing",
        }
    }
}

impl std::fmt::Display for AttackType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Classify the attack type of a phishing URL.
pub fn classify_attack_type(url: &str) -> AttackType {
    let url_lower = url.to_lowercase();
    let contains_any = |keywords: &[&str]| keywords.iter().any(|kw| url_lower.contains(kw));

    if contains_any(&CREDENTIAL_KEYWORDS) {
        if contains_any(&IMPERSONATED_BRANDS) {
            return AttackType::BrandImpersonation;
        }
        return AttackType::CredentialHarvesting;
    }

    if contains_any(&PAYMENT_KEYWORDS) {
        return AttackType::PaymentScam;
    }

    if contains_any(&PRIZE_KEYWORDS) {
        return AttackType::SurveyScam;
    }

    if contains_any(&DROPPER_KEYWORDS) {
        return AttackType::MalwareDropper;
    }

    AttackType::Generic
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brand_impersonation_needs_both_signals() {
        assert_eq!(
            classify_attack_type("http://paypal-login.example.com"),
            AttackType::BrandImpersonation
        );
        assert_eq!(
            classify_attack_type("http://bank-login.example.com"),
            AttackType::CredentialHarvesting
        );
    }

    #[test]
    fn test_credential_group_wins_over_payment() {
        // "verify" appears before the payment keywords are consulted
        assert_eq!(
            classify_attack_type("http://verify-payment.example.com"),
            AttackType::CredentialHarvesting
        );
    }

    #[test]
    fn test_payment_scam() {
        assert_eq!(
            classify_attack_type("http://invoice-overdue.example.com"),
            AttackType::PaymentScam
        );
    }

    #[test]
    fn test_prize_scam() {
        assert_eq!(
            classify_attack_type("http://claim-your-prize.example.com"),
            AttackType::SurveyScam
        );
    }

    #[test]
    fn test_malware_dropper() {
        assert_eq!(
            classify_attack_type("http://flash-update.example.com/setup.exe"),
            AttackType::MalwareDropper
        );
    }

    #[test]
    fn test_generic_fallback() {
        assert_eq!(
            classify_attack_type("http://example-random.com/page"),
            AttackType::Generic
        );
    }
}
