//! Lexical Rule Contributions & Thresholds
//!
//! Score contributions for each structural check, plus the brand-typo
//! pattern tables. No classification logic here - only constants and config.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

// ============================================================================
// CONTRIBUTIONS (one per check, in check order)
// ============================================================================

/// Check 1: hostname has no domain extension
pub const NO_DOT_HOST_CONTRIBUTION: u32 = 30;

/// Check 2: first hostname label looks like a brand typo
pub const BRAND_TYPO_CONTRIBUTION: u32 = 35;

/// Check 3: scheme is not https
pub const INSECURE_SCHEME_CONTRIBUTION: u32 = 20;

/// Check 4: punycode marker or characters outside the allowed set
pub const IDN_MARKER_CONTRIBUTION: u32 = 15;

/// Check 5: hostname is a raw IPv4 literal
pub const IPV4_HOST_CONTRIBUTION: u32 = 25;

/// Check 6: more than MAX_HOST_LABELS dot-separated labels
pub const DEEP_SUBDOMAIN_CONTRIBUTION: u32 = 20;

/// Check 7: explicit port other than 80/443
pub const UNUSUAL_PORT_CONTRIBUTION: u32 = 15;

/// Check 8: total URL length over LONG_URL_LENGTH
pub const LONG_URL_CONTRIBUTION: u32 = 10;

/// Unparseable input short-circuits with a single issue at this weight
pub const INVALID_URL_CONTRIBUTION: u32 = 95;

// ============================================================================
// THRESHOLDS
// ============================================================================

/// At or above this local score the URL is treated as phishing
pub const PHISHING_SCORE_THRESHOLD: u32 = 40;

/// Hostnames with more labels than this are suspicious
pub const MAX_HOST_LABELS: usize = 3;

/// URLs longer than this are suspicious
pub const LONG_URL_LENGTH: usize = 200;

/// URL characters outside alphanumerics and this set trigger check 4
pub const ALLOWED_URL_PUNCTUATION: &str = "-._~:/?#@!$&'()*+,;=%";

// ============================================================================
// BRAND TABLES
// ============================================================================

/// Typo/homoglyph patterns for widely impersonated brands.
///
/// Matched against the FIRST hostname label only, so `www.paypal.com` never
/// reaches the pattern while `paypal-secure.com` does.
static BRAND_TYPO_PATTERNS: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    [
        ("paypal", r"pay-?p[a4][l1]"),
        ("google", r"g[o0]{2}g[l1]e"),
        ("amazon", r"[a4]m[a4]z[o0]n"),
        ("facebook", r"f[a4]c[e3]b[o0]{2}k"),
        ("microsoft", r"micr[o0]s[o0]ft"),
        ("apple", r"[a4]pp[l1]e"),
        ("netflix", r"netf[l1]ix"),
        ("instagram", r"inst[a4]gr[a4]m"),
        ("linkedin", r"[l1]inked[i1]n"),
        ("chase", r"ch[a4]se"),
        ("wellsfargo", r"we[l1]{2}s-?f[a4]rg[o0]"),
    ]
    .into_iter()
    .map(|(brand, pattern)| {
        let re = Regex::new(pattern).expect("brand typo pattern must compile");
        (brand, re)
    })
    .collect()
});

/// Exact labels that are the real brands the patterns hunt look-alikes of.
/// Without this list every legitimate brand domain would flag itself.
static BRAND_ALLOW_LIST: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "paypal",
        "google",
        "amazon",
        "facebook",
        "microsoft",
        "apple",
        "netflix",
        "instagram",
        "linkedin",
        "chase",
        "wellsfargo",
    ]
    .into_iter()
    .collect()
});

// ============================================================================
// CONFIG
// ============================================================================

/// Rule-engine tuning, swappable per test or per deployment
#[derive(Debug, Clone)]
pub struct LexicalRuleConfig {
    /// Local score at which `is_phishing` flips on
    pub phishing_threshold: u32,
    /// Hostname label count above which check 6 fires
    pub max_host_labels: usize,
    /// URL length above which check 8 fires
    pub long_url_length: usize,
}

impl Default for LexicalRuleConfig {
    fn default() -> Self {
        Self {
            phishing_threshold: PHISHING_SCORE_THRESHOLD,
            max_host_labels: MAX_HOST_LABELS,
            long_url_length: LONG_URL_LENGTH,
        }
    }
}

/// Brand whose typo pattern matches `label`, unless the label is the exact
/// brand itself.
pub fn matching_typo_brand(label: &str) -> Option<&'static str> {
    if BRAND_ALLOW_LIST.contains(label) {
        return None;
    }
    BRAND_TYPO_PATTERNS
        .iter()
        .find(|(_, re)| re.is_match(label))
        .map(|(brand, _)| *brand)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_brand_label_is_allowed() {
        assert_eq!(matching_typo_brand("paypal"), None);
        assert_eq!(matching_typo_brand("google"), None);
    }

    #[test]
    fn test_lookalike_labels_match() {
        assert_eq!(matching_typo_brand("paypal-secure"), Some("paypal"));
        assert_eq!(matching_typo_brand("payp4l"), Some("paypal"));
        assert_eq!(matching_typo_brand("g00gle"), Some("google"));
        assert_eq!(matching_typo_brand("micr0soft-login"), Some("microsoft"));
    }

    #[test]
    fn test_unrelated_labels_do_not_match() {
        assert_eq!(matching_typo_brand("www"), None);
        assert_eq!(matching_typo_brand("example"), None);
        assert_eq!(matching_typo_brand("mail"), None);
    }
}
