//! # Error Types
//!
//! This module defines error types used by the glue around the design engine.
//!
//! The engine itself (seeded icons, normalization, contrast, collision and
//! card layout) is total and never produces these errors. They only surface
//! from I/O, the blob store, design providers and the HTTP server.

use axum::http::StatusCode;
use thiserror::Error;

/// Main error type for cardgen operations
#[derive(Debug, Error)]
pub enum CardgenError {
    /// Transport-level errors (bind, serve, outbound HTTP)
    #[error("Transport error: {0}")]
    Transport(String),

    /// A request was missing required fields or carried invalid values
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// A named resource (template, job, blob) does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// External design provider failure
    #[error("Provider error: {0}")]
    Provider(String),

    /// Blob store failure (bad data URL, undecodable payload)
    #[error("Store error: {0}")]
    Store(String),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error wrapper
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CardgenError {
    /// HTTP status code used when this error crosses the server boundary.
    pub fn status_code(&self) -> StatusCode {
        match self {
            CardgenError::InvalidRequest(_) | CardgenError::Store(_) | CardgenError::Json(_) => {
                StatusCode::BAD_REQUEST
            }
            CardgenError::NotFound(_) => StatusCode::NOT_FOUND,
            CardgenError::Provider(_) | CardgenError::Transport(_) => StatusCode::BAD_GATEWAY,
            CardgenError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<CardgenError> for (StatusCode, String) {
    fn from(err: CardgenError) -> Self {
        (err.status_code(), err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            CardgenError::NotFound("job".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            CardgenError::InvalidRequest("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        let (code, msg) = <(StatusCode, String)>::from(CardgenError::Store("bad".into()));
        assert_eq!(code, StatusCode::BAD_REQUEST);
        assert_eq!(msg, "Store error: bad");
    }
}
