//! Error handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::logic::model::ModelError;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug)]
pub enum AppError {
    // Request errors
    InvalidUrl { message: String, received: String },
    ValidationError(String),

    // External service errors
    ModelService(String),

    // Generic errors
    InternalError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::InvalidUrl { message, received } => {
                let body = Json(json!({
                    "error": "InvalidURL",
                    "message": message,
                    "example": "https://example.com",
                    "received": received
                }));
                (StatusCode::BAD_REQUEST, body).into_response()
            }
            AppError::ValidationError(message) => {
                let body = Json(json!({
                    "error": message,
                    "status": StatusCode::BAD_REQUEST.as_u16()
                }));
                (StatusCode::BAD_REQUEST, body).into_response()
            }
            AppError::ModelService(message) => {
                tracing::error!("Prediction service error: {}", message);
                let body = Json(json!({
                    "error": "Prediction service unavailable",
                    "status": StatusCode::BAD_GATEWAY.as_u16()
                }));
                (StatusCode::BAD_GATEWAY, body).into_response()
            }
            AppError::InternalError(message) => {
                tracing::error!("Internal error: {}", message);
                let body = Json(json!({
                    "error": "Internal server error",
                    "status": StatusCode::INTERNAL_SERVER_ERROR.as_u16()
                }));
                (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
            }
        }
    }
}

impl From<ModelError> for AppError {
    fn from(err: ModelError) -> Self {
        AppError::ModelService(err.to_string())
    }
}
