//! Payload dump output subsystem.
//!
//! # Data Flow
//! ```text
//! measurement handler (parsed JSON Value)
//!     → sink.rs (pretty-print, framed block, flush)
//!     → stdout (or an in-memory buffer in tests)
//! ```
//!
//! # Design Decisions
//! - stdout is the only shared mutable resource in the process; the sink
//!   serializes writes so concurrent requests never interleave dump blocks
//! - every block is flushed immediately so `tail`-style observers see it
//!   without buffering delay

pub mod sink;

pub use sink::MeasurementSink;
