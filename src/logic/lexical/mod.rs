//! Lexical Rule Engine Module
//!
//! Structural URL analysis independent of any ML model. One pass over the
//! URL string runs a fixed, ordered check table and produces a bounded local
//! risk score with per-check findings.
//!
//! ## Structure
//! - `types`: Issue, IssueSeverity, ValidationResult
//! - `rules`: contributions, thresholds, brand-typo tables
//! - `engine`: the checks themselves
//!
//! ## Usage
//! ```ignore
//! use crate::logic::lexical;
//!
//! let result = lexical::evaluate("http://paypal-secure.com");
//! if result.is_phishing {
//!     // local evidence alone crossed the line
//! }
//! ```

pub mod engine;
pub mod rules;
pub mod types;

pub use engine::{evaluate, evaluate_with_config};
pub use rules::{LexicalRuleConfig, PHISHING_SCORE_THRESHOLD};
pub use types::{Issue, IssueSeverity, ValidationResult};
