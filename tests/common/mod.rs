//! Shared utilities for integration tests.

use std::io::Write;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use shenai_mock::{MeasurementSink, MockConfig, MockServer};
use tokio::net::TcpListener;

/// Header line framing every payload dump.
#[allow(dead_code)]
pub const DUMP_HEADER: &str = "=== Shen-AI measurement received ===";

/// Writer that appends into a shared buffer the test can read back,
/// standing in for the server's stdout.
#[derive(Clone)]
pub struct CapturedOutput(Arc<Mutex<Vec<u8>>>);

impl CapturedOutput {
    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for CapturedOutput {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Spawn a mock server on an ephemeral local port with its dump sink
/// redirected into a captured buffer. Returns the bound address and the
/// capture handle.
pub async fn spawn_server(config: MockConfig) -> (SocketAddr, CapturedOutput) {
    let capture = CapturedOutput(Arc::new(Mutex::new(Vec::new())));
    let sink = MeasurementSink::new(capture.clone());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let server = MockServer::with_sink(config, sink);
    tokio::spawn(async move {
        let _ = server.run(listener).await;
    });

    (addr, capture)
}
