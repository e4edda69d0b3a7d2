//! Unified error types for the MarkPress API
//!
//! This module defines error types for each layer:
//! - `NotionError`: document-database client errors
//! - `BlogError`: downstream blog forwarding errors
//! - `AppError`: application layer errors (wraps client errors for HTTP responses)
//!
//! Every handler failure serializes as `{"success": false, "error": "..."}`
//! with the upstream message carried verbatim: HTTP 400 for missing or
//! invalid input, HTTP 500 for everything else.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Notion API client errors
#[derive(Debug, Error)]
pub enum NotionError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Rate limited")]
    RateLimited,

    #[error("Unauthorized - invalid token")]
    Unauthorized,

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

/// Downstream blog forwarding errors
#[derive(Debug, Error)]
pub enum BlogError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Blog API error: {status} - {message}")]
    Api { status: u16, message: String },
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Notion(#[from] NotionError),

    #[error("{0}")]
    BadRequest(String),

    #[error("Document too large: {0}")]
    DocumentTooLarge(String),
}

/// Error response body for JSON responses
#[derive(Serialize)]
struct ErrorResponse {
    success: bool,
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Notion(e) => {
                tracing::error!("Notion error: {}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::DocumentTooLarge(msg) => {
                tracing::error!("Document too large: {}", msg);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(ErrorResponse {
            success: false,
            error: self.to_string(),
        });

        (status, body).into_response()
    }
}
