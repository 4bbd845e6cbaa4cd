//! Error types and error handling for the listing server
//!
//! Errors convert to HTTP responses carrying the failed listing envelope, so a
//! client sees `{ "success": false, "error": ... }` whatever went wrong.

use crate::directory::ListingEnvelope;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

/// Application-level error types
#[derive(Error, Debug)]
pub enum AppError {
    /// The seed worker list could not be loaded
    #[error("Worker catalog unavailable: {0}")]
    CatalogUnavailable(String),
}

impl AppError {
    /// HTTP status this error maps to
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::CatalogUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ListingEnvelope::failed(self.to_string()));

        (status, body).into_response()
    }
}
