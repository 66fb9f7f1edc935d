//! Startup configuration.
//!
//! # Design Decisions
//! - Config is immutable once built; there is no config file and no reload
//! - All fields have defaults so `MockConfig::default()` is a working server
//! - The listening address is always all interfaces; only the port varies

use std::net::{Ipv4Addr, SocketAddr};

/// Default listening port when no argument is given.
pub const DEFAULT_PORT: u16 = 8000;

/// Configuration for the mock endpoint server.
#[derive(Debug, Clone)]
pub struct MockConfig {
    /// TCP port to listen on.
    pub port: u16,

    /// Emit one diagnostic log line per handled request.
    ///
    /// Off by default: the only thing the server normally writes per
    /// request is the payload dump on stdout.
    pub enable_access_log: bool,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            enable_access_log: false,
        }
    }
}

impl MockConfig {
    /// Socket address the server binds: all interfaces on the configured port.
    pub fn bind_address(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}
