//! Request Input Validation
//!
//! Boundary checks on the submitted URL string, run before the pipeline.
//! These guard the API surface; the lexical engine itself stays total and
//! classifies whatever reaches it.

use crate::constants::{MAX_URL_LENGTH, MIN_URL_LENGTH};

/// Substrings rejected outright to keep script payloads out of reports
const SUSPICIOUS_CONTENT: [&str; 4] = ["<script", "javascript:", "data:", "vbscript:"];

/// Validate a URL submitted to the API.
///
/// Returns the rejection message for invalid input.
pub fn validate_input(url: &str) -> Result<(), String> {
    let trimmed = url.trim();

    if trimmed.is_empty() {
        return Err("URL cannot be empty".to_string());
    }

    if trimmed.len() > MAX_URL_LENGTH {
        return Err(format!("URL too long (max {} characters)", MAX_URL_LENGTH));
    }

    if trimmed.len() < MIN_URL_LENGTH {
        return Err("URL too short".to_string());
    }

    if !trimmed.starts_with("http://") && !trimmed.starts_with("https://") {
        return Err("URL must start with http:// or https://".to_string());
    }

    let lower = trimmed.to_lowercase();
    for pattern in SUSPICIOUS_CONTENT {
        if lower.contains(pattern) {
            return Err("URL contains suspicious content".to_string());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_normal_urls() {
        assert!(validate_input("https://example.com").is_ok());
        assert!(validate_input("http://paypal-secure.com/login").is_ok());
        assert!(validate_input("  https://example.com  ").is_ok());
    }

    #[test]
    fn test_rejects_empty_and_whitespace() {
        assert!(validate_input("").is_err());
        assert!(validate_input("   ").is_err());
    }

    #[test]
    fn test_rejects_overlong() {
        let long = format!("https://example.com/{}", "a".repeat(MAX_URL_LENGTH));
        assert!(validate_input(&long).is_err());
    }

    #[test]
    fn test_rejects_missing_scheme() {
        assert!(validate_input("example.com").is_err());
        assert!(validate_input("ftp://example.com").is_err());
    }

    #[test]
    fn test_rejects_script_content() {
        assert!(validate_input("http://x.com/<script>alert(1)</script>").is_err());
        assert!(validate_input("http://x.com/?r=javascript:alert(1)").is_err());
    }
}
