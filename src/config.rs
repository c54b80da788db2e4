//! Configuration module

use std::env;

use crate::constants;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,

    /// Base URL of the ML prediction service
    pub model_service_url: String,

    /// Prediction service timeout in seconds
    pub model_timeout_seconds: u64,

    /// Environment (development, production)
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(constants::DEFAULT_PORT),

            model_service_url: constants::get_model_service_url(),

            model_timeout_seconds: constants::get_model_timeout_secs(),

            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
        }
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}
