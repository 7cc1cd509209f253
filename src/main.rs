//! pathway server binary.
//!
//! ```text
//!     Client Request
//!     ──────────────▶ axum (http::server) ──▶ Dispatcher::handle
//!                                              │
//!                                              ├─▶ RouteTrie::resolve
//!                                              ├─▶ global handlers
//!                                              └─▶ route handlers (stop on respond)
//!     Client Response
//!     ◀────────────── status + body ◀──────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use pathway::http::HttpServer;
use pathway::lifecycle::{signals, startup, Shutdown};
use pathway::observability::logging;

#[derive(Parser)]
#[command(name = "pathway")]
#[command(about = "Trie-based request router and dispatcher", long_about = None)]
struct Cli {
    /// TOML configuration file; defaults are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = startup::load(cli.config.as_deref())?;

    logging::init(&config.observability)?;
    tracing::info!("pathway v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        routes = config.routes.len(),
        "Configuration loaded"
    );

    // A conflicting route ends start-up here, before anything listens.
    let dispatcher = startup::build_dispatcher(&config)?;

    let listener = TcpListener::bind(&config.listener.bind_address).await?;

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    signals::spawn_interrupt_listener(shutdown);

    let server = HttpServer::new(config, dispatcher);
    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
