//! The measurement dump sink.

use std::io::Write;
use std::sync::{Arc, Mutex};

use serde_json::Value;

/// Header line written above every dumped payload.
const DUMP_HEADER: &str = "=== Shen-AI measurement received ===";

/// Destination for received measurement payloads.
///
/// Wraps a writer behind a mutex so each dump block (header, pretty JSON,
/// trailing blank line) lands on the stream as one uninterrupted unit even
/// when requests are handled concurrently. Cloning is cheap; clones share
/// the same underlying writer.
#[derive(Clone)]
pub struct MeasurementSink {
    writer: Arc<Mutex<Box<dyn Write + Send>>>,
}

impl MeasurementSink {
    /// Sink backed by the process's standard output.
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }

    /// Sink backed by an arbitrary writer. Tests use this with an
    /// in-memory buffer to capture dump output.
    pub fn new<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Arc::new(Mutex::new(Box::new(writer))),
        }
    }

    /// Write one framed dump block and flush it.
    ///
    /// Block layout, byte for byte:
    /// a leading blank line, the header line, the payload re-serialized
    /// with 2-space indentation, and a trailing blank line.
    pub fn record(&self, payload: &Value) -> std::io::Result<()> {
        let pretty = serde_json::to_string_pretty(payload)?;

        let mut writer = self
            .writer
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        writeln!(writer, "\n{DUMP_HEADER}\n{pretty}")?;
        writeln!(writer)?;
        writer.flush()
    }
}

impl std::fmt::Debug for MeasurementSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MeasurementSink").finish_non_exhaustive()
    }
}
