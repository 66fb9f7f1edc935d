//! Request-handling errors.
//!
//! Two error kinds are recognized at the route level: a body that is not
//! valid JSON (client error, 400) and a dump sink that can no longer be
//! written (server error, 500). Unknown paths never reach a handler; the
//! router's fallback answers 404 directly.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Errors that can occur while handling a measurement upload.
#[derive(Debug, Error)]
pub enum HandlerError {
    /// Request body was not syntactically valid JSON.
    #[error("Invalid JSON")]
    InvalidPayload(#[source] serde_json::Error),

    /// The payload dump could not be written to the sink.
    #[error("failed to write measurement dump: {0}")]
    Dump(#[from] std::io::Error),
}

impl IntoResponse for HandlerError {
    fn into_response(self) -> Response {
        match self {
            HandlerError::InvalidPayload(ref source) => {
                tracing::debug!(error = %source, "Rejected body that is not valid JSON");
                (StatusCode::BAD_REQUEST, "Invalid JSON").into_response()
            }
            HandlerError::Dump(ref source) => {
                tracing::error!(error = %source, "Could not dump received payload");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal error").into_response()
            }
        }
    }
}
