//! HTTP server setup.
//!
//! # Responsibilities
//! - Create the Axum Router with the measurement route and 404 fallback
//! - Wire up the optional access-log layer
//! - Bind server to listener and serve until shutdown

use axum::{routing::post, Router};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::config::MockConfig;
use crate::http::handlers;
use crate::output::MeasurementSink;

/// Path of the single route the mock impersonates.
pub const MEASUREMENTS_PATH: &str = "/shenai/measurements";

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub sink: MeasurementSink,
}

/// HTTP server for the mock endpoint.
pub struct MockServer {
    router: Router,
    config: MockConfig,
}

impl MockServer {
    /// Create a server that dumps received payloads to stdout.
    pub fn new(config: MockConfig) -> Self {
        Self::with_sink(config, MeasurementSink::stdout())
    }

    /// Create a server with a custom dump sink. Tests use this to capture
    /// dump output in memory.
    pub fn with_sink(config: MockConfig, sink: MeasurementSink) -> Self {
        let state = AppState { sink };
        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router.
    ///
    /// Only POST is routed on the measurements path; Axum answers other
    /// methods there with 405 and the fallback answers every other path
    /// with 404. Per-request logging is layered in only on request, so a
    /// default run writes nothing to the diagnostic stream per request.
    fn build_router(config: &MockConfig, state: AppState) -> Router {
        let router = Router::new()
            .route(MEASUREMENTS_PATH, post(handlers::receive_measurement))
            .fallback(handlers::not_found)
            .with_state(state);

        if config.enable_access_log {
            router.layer(TraceLayer::new_for_http())
        } else {
            router
        }
    }

    /// Run the server, accepting connections on the given listener until
    /// Ctrl+C.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &MockConfig {
        &self.config
    }
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown signal received"),
        Err(e) => {
            // Returning here would tear the server down; stay pending so
            // the process keeps serving and exits only by being killed.
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_exposes_its_config() {
        let server = MockServer::new(MockConfig {
            port: 9100,
            enable_access_log: true,
        });

        assert_eq!(server.config().port, 9100);
        assert!(server.config().enable_access_log);
        assert_eq!(server.config().bind_address().to_string(), "0.0.0.0:9100");
    }
}
