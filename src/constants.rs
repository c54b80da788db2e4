//! Central Configuration Constants
//!
//! Single source of truth for configuration defaults and API limits.

/// Default prediction service URL
///
/// Fallback when no environment variable is set.
pub const DEFAULT_MODEL_SERVICE_URL: &str = "http://localhost:8000";

/// Default prediction service timeout (seconds)
pub const DEFAULT_MODEL_TIMEOUT_SECS: u64 = 10;

/// Default server port
pub const DEFAULT_PORT: u16 = 8080;

/// Maximum URLs per batch request
pub const MAX_BATCH_SIZE: usize = 100;

/// Maximum accepted URL length
pub const MAX_URL_LENGTH: usize = 2048;

/// Minimum accepted URL length
pub const MIN_URL_LENGTH: usize = 4;

/// App version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// App name
pub const APP_NAME: &str = "PhishSentry";

// ============================================
// Helper functions to read from env with fallback
// ============================================

/// Get prediction service URL from environment or use default
pub fn get_model_service_url() -> String {
    std::env::var("MODEL_SERVICE_URL").unwrap_or_else(|_| DEFAULT_MODEL_SERVICE_URL.to_string())
}

/// Get prediction service timeout from environment or use default
pub fn get_model_timeout_secs() -> u64 {
    std::env::var("MODEL_SERVICE_TIMEOUT_SECS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_MODEL_TIMEOUT_SECS)
}
