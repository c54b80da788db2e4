//! Lexical Analysis Types
//!
//! Core types for the lexical rule engine.
//! No logic here - only data structures.

use serde::{Deserialize, Serialize};

// ============================================================================
// ISSUE
// ============================================================================

/// Severity of a single lexical finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueSeverity {
    /// Strong structural evidence of phishing
    Critical,
    /// Weak or circumstantial evidence
    Warning,
}

impl IssueSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueSeverity::Critical => "critical",
            IssueSeverity::Warning => "warning",
        }
    }
}

impl std::fmt::Display for IssueSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One triggered check: what fired, why, and how much it contributes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub title: String,
    pub description: String,
    pub severity: IssueSeverity,
    pub score_contribution: u32,
}

impl Issue {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        severity: IssueSeverity,
        score_contribution: u32,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity,
            score_contribution,
        }
    }
}

// ============================================================================
// VALIDATION RESULT
// ============================================================================

/// Result of one rule-engine pass over a URL
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub issues: Vec<Issue>,
    /// Sum of triggered contributions, capped at 100
    pub score: u32,
    pub is_phishing: bool,
    pub is_valid: bool,
}

impl ValidationResult {
    /// Build a result from triggered issues.
    ///
    /// `score` is the capped contribution sum, `is_phishing` compares it to
    /// the configured threshold, `is_valid` means no check fired at all.
    pub fn from_issues(issues: Vec<Issue>, phishing_threshold: u32) -> Self {
        let score = issues
            .iter()
            .map(|i| i.score_contribution)
            .sum::<u32>()
            .min(100);

        Self {
            score,
            is_phishing: score >= phishing_threshold,
            is_valid: issues.is_empty(),
            issues,
        }
    }
}
