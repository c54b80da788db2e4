//! Domain Trust Tables
//!
//! Hand-curated reputation tables: high-trust domains, hostname phishing
//! keywords, and per-brand authorized domain sets. Constants only - the
//! matching logic lives in `analyze`.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

// ============================================================================
// HIGH-TRUST DOMAINS
// ============================================================================

/// Domains trusted enough to boost a legitimate verdict. Exact or parent
/// match; see `analyze::analyze_domain`.
pub static HIGH_TRUST_DOMAINS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        // Search engines & tech giants
        "google.com",
        "google.co.uk",
        "google.de",
        "bing.com",
        "yahoo.com",
        "duckduckgo.com",
        "baidu.com",
        // Social media
        "facebook.com",
        "twitter.com",
        "instagram.com",
        "linkedin.com",
        "reddit.com",
        "tiktok.com",
        "whatsapp.com",
        // E-commerce
        "amazon.com",
        "amazon.co.uk",
        "amazon.de",
        "ebay.com",
        "aliexpress.com",
        "walmart.com",
        "etsy.com",
        "shopify.com",
        // Microsoft
        "microsoft.com",
        "live.com",
        "outlook.com",
        "office.com",
        "windows.com",
        "xbox.com",
        "skype.com",
        // Media & entertainment
        "youtube.com",
        "netflix.com",
        "twitch.tv",
        "spotify.com",
        "imdb.com",
        "cnn.com",
        "bbc.com",
        "nytimes.com",
        "reuters.com",
        // Cloud & CDN
        "cloudflare.com",
        "amazonaws.com",
        "googleusercontent.com",
        "cloudfront.net",
        "fastly.net",
        // Finance
        "paypal.com",
        "chase.com",
        "bankofamerica.com",
        "wellsfargo.com",
        "citibank.com",
        "hsbc.com",
        "visa.com",
        "mastercard.com",
        // Education & knowledge
        "wikipedia.org",
        "stackoverflow.com",
        "github.com",
        "gitlab.com",
        "medium.com",
        "wordpress.com",
        // Popular services
        "dropbox.com",
        "zoom.us",
        "slack.com",
        "discord.com",
        "telegram.org",
        "apple.com",
        "icloud.com",
        "adobe.com",
        "salesforce.com",
        "notion.so",
        // Travel
        "booking.com",
        "airbnb.com",
        "tripadvisor.com",
        // Others
        "archive.org",
        "vimeo.com",
        "blogger.com",
    ]
    .into_iter()
    .collect()
});

/// TLDs treated as strong trust signals on their own
pub const TRUSTED_TLDS: [&str; 3] = [".gov", ".edu", ".mil"];

// ============================================================================
// PHISHING KEYWORDS
// ============================================================================

/// Keywords suspicious when they appear as whole words in a hostname
pub const PHISHING_KEYWORDS: [&str; 11] = [
    "login",
    "verify",
    "secure",
    "account",
    "update",
    "confirm",
    "banking",
    "payment",
    "wallet",
    "credential",
    "password",
];

/// Whole-word matchers for the keyword table
pub static KEYWORD_PATTERNS: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    PHISHING_KEYWORDS
        .iter()
        .map(|kw| {
            let re = Regex::new(&format!(r"\b{}\b", kw)).expect("keyword pattern must compile");
            (*kw, re)
        })
        .collect()
});

// ============================================================================
// BRAND AUTHORIZATION
// ============================================================================

/// Brands commonly impersonated, with the only domains authorized to carry
/// their name. A hostname containing the brand outside this set is mimicry.
pub const BRAND_AUTHORIZED_DOMAINS: [(&str, &[&str]); 11] = [
    ("google", &["google.com", "google.co", "accounts.google.com", "drive.google.com"]),
    ("paypal", &["paypal.com", "paypal.me", "paypal.co"]),
    ("amazon", &["amazon.com", "amazon.co", "aws.amazon.com"]),
    ("facebook", &["facebook.com", "fb.com", "messenger.com"]),
    ("instagram", &["instagram.com"]),
    ("microsoft", &["microsoft.com", "office.com", "live.com", "outlook.com", "azure.com"]),
    ("apple", &["apple.com", "icloud.com"]),
    ("netflix", &["netflix.com"]),
    ("linkedin", &["linkedin.com"]),
    ("chase", &["chase.com"]),
    ("wellsfargo", &["wellsfargo.com"]),
];

// ============================================================================
// EDIT DISTANCE
// ============================================================================

/// Levenshtein distance, used for typosquatting detection against the
/// trust list.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut previous: Vec<usize> = (0..=b.len()).collect();
    let mut current = vec![0usize; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        current[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let insertions = previous[j + 1] + 1;
            let deletions = current[j] + 1;
            let substitutions = previous[j] + usize::from(ca != cb);
            current[j + 1] = insertions.min(deletions).min(substitutions);
        }
        std::mem::swap(&mut previous, &mut current);
    }

    previous[b.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levenshtein_basics() {
        assert_eq!(levenshtein("", "abc"), 3);
        assert_eq!(levenshtein("abc", ""), 3);
        assert_eq!(levenshtein("google.com", "google.com"), 0);
        assert_eq!(levenshtein("gogle.com", "google.com"), 1);
        assert_eq!(levenshtein("paypa1.com", "paypal.com"), 1);
        assert_eq!(levenshtein("amaz0n.co", "amazon.com"), 2);
    }

    #[test]
    fn test_keyword_patterns_match_whole_words_only() {
        let (_, login) = &KEYWORD_PATTERNS[0];
        assert!(login.is_match("secure-login.example.com"));
        assert!(!login.is_match("loginsight.com"));

        let account = KEYWORD_PATTERNS
            .iter()
            .find(|(kw, _)| *kw == "account")
            .map(|(_, re)| re)
            .unwrap();
        assert!(account.is_match("my-account.example.com"));
        // plural is a different word
        assert!(!account.is_match("accounts-google.com"));
    }
}
