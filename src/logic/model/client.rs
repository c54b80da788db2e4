//! Prediction Service Client
//!
//! HTTP client for the remote ML prediction service. The only asynchronous
//! boundary of the pipeline; everything downstream is pure.

use std::time::Duration;

use super::types::{ModelError, ModelPrediction, PredictRequest, PredictResponse};

/// Client configuration
#[derive(Debug, Clone)]
pub struct ModelClientConfig {
    pub base_url: String,
    pub timeout_seconds: u64,
}

impl Default for ModelClientConfig {
    fn default() -> Self {
        use crate::constants;

        Self {
            base_url: constants::get_model_service_url(),
            timeout_seconds: constants::get_model_timeout_secs(),
        }
    }
}

/// Async client for the prediction service. Cheap to clone; the inner
/// `reqwest::Client` pools connections.
#[derive(Clone)]
pub struct ModelClient {
    base_url: String,
    http: reqwest::Client,
}

impl ModelClient {
    pub fn new(config: ModelClientConfig) -> Result<Self, ModelError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    /// Request a verdict for one URL.
    pub async fn predict(&self, url: &str) -> Result<ModelPrediction, ModelError> {
        let endpoint = format!("{}/predict", self.base_url);

        let response = self
            .http
            .post(&endpoint)
            .json(&PredictRequest {
                url: url.to_string(),
            })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ModelError::Status(response.status().as_u16()));
        }

        let wire: PredictResponse = response
            .json()
            .await
            .map_err(|e| ModelError::Protocol(e.to_string()))?;

        let prediction = ModelPrediction::from_wire(wire)?;
        tracing::debug!(
            label = prediction.label.as_str(),
            confidence = prediction.confidence,
            "prediction service verdict"
        );
        Ok(prediction)
    }

    /// Probe the prediction service health endpoint.
    pub async fn health_check(&self) -> Result<(), ModelError> {
        let endpoint = format!("{}/health", self.base_url);

        let response = self.http.get(&endpoint).send().await?;
        if response.status().is_success() {
            Ok(())
        } else {
            Err(ModelError::Status(response.status().as_u16()))
        }
    }
}
