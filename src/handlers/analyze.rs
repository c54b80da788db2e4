//! Analysis handlers
//!
//! Single and batch URL analysis. The two endpoints deliberately use
//! different band-threshold variants; see `threat_index::rules`.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::logic::pipeline::{self, AnalysisReport};
use crate::logic::threat_index::BandThresholds;
use crate::logic::validate;
use crate::{constants, AppError, AppResult, AppState};

// ============================================================================
// REQUEST / RESPONSE TYPES
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct UrlInput {
    pub url: String,
}

#[derive(Debug, Deserialize)]
pub struct UrlBatchInput {
    pub urls: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct BatchItemError {
    pub url: String,
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct BatchReport {
    pub total: usize,
    pub successful: usize,
    pub failed: usize,
    pub results: Vec<AnalysisReport>,
    pub errors: Vec<BatchItemError>,
    pub timestamp: String,
}

// ============================================================================
// HANDLERS
// ============================================================================

/// Analyze a single URL (Variant A bands)
pub async fn single(
    State(state): State<AppState>,
    Json(input): Json<UrlInput>,
) -> AppResult<Json<AnalysisReport>> {
    let url = input.url.trim().to_string();

    validate::validate_input(&url).map_err(|message| {
        tracing::warn!("Invalid URL rejected: {}", url);
        AppError::InvalidUrl {
            message,
            received: url.clone(),
        }
    })?;

    let report =
        pipeline::analyze_url(&state.model, &url, &BandThresholds::single_view()).await?;
    Ok(Json(report))
}

/// Analyze a batch of URLs (Variant B bands)
///
/// Per-URL failures are collected rather than failing the whole batch.
pub async fn batch(
    State(state): State<AppState>,
    Json(input): Json<UrlBatchInput>,
) -> AppResult<Json<BatchReport>> {
    if input.urls.is_empty() {
        return Err(AppError::ValidationError("Batch must contain at least one URL".to_string()));
    }
    if input.urls.len() > constants::MAX_BATCH_SIZE {
        return Err(AppError::ValidationError(format!(
            "Batch size {} exceeds maximum of {}",
            input.urls.len(),
            constants::MAX_BATCH_SIZE
        )));
    }

    let thresholds = BandThresholds::batch_view();
    let total = input.urls.len();
    let mut results = Vec::new();
    let mut errors = Vec::new();

    for raw in input.urls {
        let url = raw.trim().to_string();

        if let Err(message) = validate::validate_input(&url) {
            errors.push(BatchItemError { url, error: message });
            continue;
        }

        match pipeline::analyze_url(&state.model, &url, &thresholds).await {
            Ok(report) => results.push(report),
            Err(err) => {
                tracing::warn!("Batch item failed for {}: {}", url, err);
                errors.push(BatchItemError {
                    url,
                    error: err.to_string(),
                });
            }
        }
    }

    Ok(Json(BatchReport {
        total,
        successful: results.len(),
        failed: errors.len(),
        results,
        errors,
        timestamp: chrono::Utc::now().to_rfc3339(),
    }))
}
