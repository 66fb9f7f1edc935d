//! Mock Shen-AI Measurement Endpoint
//!
//! A stand-in HTTP service for the Shen-AI measurement upload path, built
//! with Tokio and Axum. Client developers point their upload code at this
//! server instead of a real backend; every measurement posted to
//! `/shenai/measurements` is pretty-printed to stdout and acknowledged
//! with `OK`.

pub mod config;
pub mod error;
pub mod http;
pub mod output;

pub use config::MockConfig;
pub use http::MockServer;
pub use output::MeasurementSink;
