//! Route handlers.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use serde_json::Value;

use crate::error::HandlerError;
use crate::http::server::AppState;

/// `POST /shenai/measurements`
///
/// Parses the body as JSON, dumps it to the sink, and acknowledges with
/// the literal body `OK`. The payload is treated as opaque structured
/// data; no schema is enforced.
pub async fn receive_measurement(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<&'static str, HandlerError> {
    // An absent Content-Length arrives here as an empty body, which fails
    // the parse and is answered with 400 like any other malformed payload.
    let payload: Value =
        serde_json::from_slice(&body).map_err(HandlerError::InvalidPayload)?;

    tracing::debug!(bytes = body.len(), "Measurement payload accepted");
    state.sink.record(&payload)?;

    Ok("OK")
}

/// Fallback for every path the mock does not impersonate.
pub async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not Found")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::MeasurementSink;

    #[tokio::test]
    async fn test_valid_json_acknowledged_with_ok() {
        let state = AppState {
            sink: MeasurementSink::new(Vec::new()),
        };
        let body = Bytes::from_static(br#"{"hr": 72}"#);

        let result = receive_measurement(State(state), body).await;
        assert_eq!(result.unwrap(), "OK");
    }

    #[tokio::test]
    async fn test_malformed_json_rejected() {
        let state = AppState {
            sink: MeasurementSink::new(Vec::new()),
        };
        let body = Bytes::from_static(b"not json");

        let result = receive_measurement(State(state), body).await;
        assert!(matches!(result, Err(HandlerError::InvalidPayload(_))));
    }

    #[tokio::test]
    async fn test_empty_body_rejected() {
        let state = AppState {
            sink: MeasurementSink::new(Vec::new()),
        };

        let result = receive_measurement(State(state), Bytes::new()).await;
        assert!(matches!(result, Err(HandlerError::InvalidPayload(_))));
    }

    #[tokio::test]
    async fn test_bare_null_is_valid_json() {
        let state = AppState {
            sink: MeasurementSink::new(Vec::new()),
        };

        let result = receive_measurement(State(state), Bytes::from_static(b"null")).await;
        assert_eq!(result.unwrap(), "OK");
    }
}
