//! Mock Shen-AI measurement endpoint.
//!
//! Accepts `POST /shenai/measurements` with a JSON body, pretty-prints the
//! payload to stdout, and replies `OK`. Everything else is 404/405. A
//! stand-in server for exercising a client's upload path.

use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use shenai_mock::config::DEFAULT_PORT;
use shenai_mock::{MockConfig, MockServer};

#[derive(Parser)]
#[command(name = "shenai-mock")]
#[command(about = "Mock HTTP endpoint for the Shen-AI measurement upload path", long_about = None)]
struct Cli {
    /// Port to listen on (all interfaces). A malformed value is a startup
    /// error, not a silent fallback to the default.
    #[arg(default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Log one diagnostic line per handled request.
    #[arg(long)]
    access_log: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Diagnostics go to stderr; stdout carries only the startup banner and
    // the payload dumps.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "shenai_mock=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let server = MockServer::new(MockConfig {
        port: cli.port,
        enable_access_log: cli.access_log,
    });

    tracing::info!(
        bind_address = %server.config().bind_address(),
        access_log = server.config().enable_access_log,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(server.config().bind_address()).await?;
    let local_addr = listener.local_addr()?;

    println!("Mock Shen-AI server listening on http://{local_addr}");
    println!("Ctrl+C to stop.");

    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
