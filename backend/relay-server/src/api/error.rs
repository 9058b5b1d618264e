//! REST API error types
//!
//! Every error renders as `{"status": <code>, "message": <text>}` so the
//! admin page and scripted callers can branch on `status`.

use relay_core::CoreError;
use relay_ws::WsError;

use std::panic::Location;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

pub const MISSING_REQUIRED_FIELDS: &str = "title and body are required";

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    /// Machine-readable status (e.g., "invalid_request")
    pub status: &'static str,
    /// Human-readable error message
    pub message: String,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed or incomplete request (400)
    #[error("Invalid request: {message} {location}")]
    InvalidRequest {
        message: String,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn invalid_request(message: impl Into<String>) -> Self {
        ApiError::InvalidRequest {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::InvalidRequest { message, location } => {
                log::warn!("Invalid request: {message} {location}");
                (
                    StatusCode::BAD_REQUEST,
                    ApiErrorResponse {
                        status: "invalid_request",
                        message,
                    },
                )
            }
            ApiError::Internal { message, location } => {
                log::error!("Internal error: {message} {location}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiErrorResponse {
                        status: "internal_error",
                        message,
                    },
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

/// Payload validation failures are the caller's fault
impl From<CoreError> for ApiError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::Validation { .. } => ApiError::invalid_request(MISSING_REQUIRED_FIELDS),
        }
    }
}

/// Unparseable bodies are reported like any other invalid request
impl From<JsonRejection> for ApiError {
    #[track_caller]
    fn from(rejection: JsonRejection) -> Self {
        ApiError::invalid_request(rejection.body_text())
    }
}

impl From<WsError> for ApiError {
    #[track_caller]
    fn from(e: WsError) -> Self {
        ApiError::Internal {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
