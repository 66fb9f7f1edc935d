//! HTTP serving subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, optional access-log layer)
//!     → handlers.rs (method/path dispatch, JSON parse)
//!     → output sink (payload dump)
//!     → fixed `OK` acknowledgment to client
//! ```

pub mod handlers;
pub mod server;

pub use server::{AppState, MockServer};
