//! Lexical Rule Engine
//!
//! Runs the fixed, ordered set of structural checks over one URL string.
//! Pure and total: malformed input is classified, never an error.

use url::{Host, Url};

use super::rules::{
    self, LexicalRuleConfig, ALLOWED_URL_PUNCTUATION, BRAND_TYPO_CONTRIBUTION,
    DEEP_SUBDOMAIN_CONTRIBUTION, IDN_MARKER_CONTRIBUTION, INSECURE_SCHEME_CONTRIBUTION,
    INVALID_URL_CONTRIBUTION, IPV4_HOST_CONTRIBUTION, LONG_URL_CONTRIBUTION,
    NO_DOT_HOST_CONTRIBUTION, UNUSUAL_PORT_CONTRIBUTION,
};
use super::types::{Issue, IssueSeverity, ValidationResult};

/// Evaluate a URL with the default rule config.
pub fn evaluate(url: &str) -> ValidationResult {
    evaluate_with_config(url, &LexicalRuleConfig::default())
}

/// Evaluate a URL against the structural check table.
///
/// Checks run in a fixed order and accumulate independently; the final score
/// is the capped sum of every triggered contribution. Input that cannot be
/// parsed at all (or has no host) collapses to a single maximal-risk finding
/// so the rest of the pipeline proceeds on a normal `ValidationResult`.
pub fn evaluate_with_config(url: &str, config: &LexicalRuleConfig) -> ValidationResult {
    let parsed = match Url::parse(url) {
        Ok(p) => p,
        Err(_) => return invalid_format(config),
    };

    let host = match parsed.host() {
        Some(h) => h.to_owned(),
        None => return invalid_format(config),
    };

    let mut issues = Vec::new();

    // Check 1: named host without a domain extension
    if let Host::Domain(domain) = &host {
        if !domain.contains('.') {
            issues.push(Issue::new(
                "No Domain Extension",
                format!("Hostname '{}' has no dot-separated domain extension", domain),
                IssueSeverity::Critical,
                NO_DOT_HOST_CONTRIBUTION,
            ));
        }
    }

    // Check 2: first label resembles a well-known brand
    if let Host::Domain(domain) = &host {
        if let Some(first_label) = domain.split('.').next() {
            if let Some(brand) = rules::matching_typo_brand(first_label) {
                issues.push(Issue::new(
                    "Brand Look-alike Domain",
                    format!("Domain label '{}' resembles the {} brand", first_label, brand),
                    IssueSeverity::Critical,
                    BRAND_TYPO_CONTRIBUTION,
                ));
            }
        }
    }

    // Check 3: insecure transport
    if parsed.scheme() != "https" {
        issues.push(Issue::new(
            "Insecure Transport",
            "Connection does not use HTTPS",
            IssueSeverity::Warning,
            INSECURE_SCHEME_CONTRIBUTION,
        ));
    }

    // Check 4: punycode marker or characters outside the allowed set
    if has_idn_markers(url) {
        issues.push(Issue::new(
            "Internationalized Characters",
            "URL carries a punycode marker or characters outside the expected set",
            IssueSeverity::Warning,
            IDN_MARKER_CONTRIBUTION,
        ));
    }

    // Check 5: raw IPv4 literal instead of a name
    if matches!(&host, Host::Ipv4(_)) {
        issues.push(Issue::new(
            "Raw IP Address Host",
            "Hostname is a numeric IPv4 address instead of a name",
            IssueSeverity::Critical,
            IPV4_HOST_CONTRIBUTION,
        ));
    }

    // Check 6: excessive subdomain nesting (named hosts only - an IPv4
    // literal always has four dot-separated octets and is check 5's job)
    if let Host::Domain(domain) = &host {
        let label_count = domain.split('.').filter(|l| !l.is_empty()).count();
        if label_count > config.max_host_labels {
            issues.push(Issue::new(
                "Excessive Subdomains",
                format!("Hostname has {} dot-separated labels", label_count),
                IssueSeverity::Warning,
                DEEP_SUBDOMAIN_CONTRIBUTION,
            ));
        }
    }

    // Check 7: explicit non-standard port. `Url::port` already hides the
    // scheme default, so any Some here was spelled out by the author.
    if let Some(port) = parsed.port() {
        if port != 80 && port != 443 {
            issues.push(Issue::new(
                "Unusual Port",
                format!("Explicit port {} is neither 80 nor 443", port),
                IssueSeverity::Warning,
                UNUSUAL_PORT_CONTRIBUTION,
            ));
        }
    }

    // Check 8: overlong URL
    if url.len() > config.long_url_length {
        issues.push(Issue::new(
            "Overlong URL",
            format!(
                "URL length {} exceeds {} characters",
                url.len(),
                config.long_url_length
            ),
            IssueSeverity::Warning,
            LONG_URL_CONTRIBUTION,
        ));
    }

    ValidationResult::from_issues(issues, config.phishing_threshold)
}

/// Maximal-risk result for input the parser rejects.
fn invalid_format(config: &LexicalRuleConfig) -> ValidationResult {
    ValidationResult::from_issues(
        vec![Issue::new(
            "Invalid URL Format",
            "Input could not be parsed as an absolute URL",
            IssueSeverity::Warning,
            INVALID_URL_CONTRIBUTION,
        )],
        config.phishing_threshold,
    )
}

/// Punycode prefix, or any character outside alphanumerics and the allowed
/// punctuation set. Non-ASCII (raw internationalized characters) lands here.
fn has_idn_markers(url: &str) -> bool {
    if url.to_ascii_lowercase().contains("xn--") {
        return true;
    }
    url.chars()
        .any(|c| !c.is_ascii_alphanumeric() && !ALLOWED_URL_PUNCTUATION.contains(c))
}
