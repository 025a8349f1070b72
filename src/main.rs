//! Caller-ID Lookup Proxy
//!
//! ```text
//!     Client                    ┌──────────────────────────────────────────┐
//!     GET /api/lookup?number=n  │              LOOKUP PROXY                │
//!     ──────────────────────────┼─▶ http::server ─▶ http::lookup          │
//!                               │                    │                     │
//!                               │                    ▼                     │
//!                               │           lookup::number (validate)      │
//!                               │                    │                     │
//!                               │                    ▼                     │
//!                               │           lookup::upstream ─────────────┼──▶ Caller-ID API
//!                               │                    │                     │
//!                               │                    ▼                     │
//!     ◀─────────────────────────┼─── lookup::outcome (normalize to JSON)  │
//!                               │                                          │
//!                               │  config · observability · lifecycle      │
//!                               └──────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use lookup_proxy::config::{load_config, validate_config, AuthSecrets, ConfigError, ProxyConfig};
use lookup_proxy::http::HttpServer;
use lookup_proxy::lifecycle::{spawn_signal_handler, Shutdown};
use lookup_proxy::observability::{logging, metrics};

#[derive(Parser)]
#[command(name = "lookup-proxy", version)]
#[command(about = "HTTP proxy for caller-ID phone number lookups", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the listener bind address (e.g. 127.0.0.1:8080).
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ProxyConfig::default(),
    };
    if let Some(bind) = cli.bind {
        config.listener.bind_address = bind;
    }
    validate_config(&config).map_err(ConfigError::Validation)?;

    logging::init(&config.observability);
    tracing::info!("lookup-proxy v{} starting", env!("CARGO_PKG_VERSION"));

    tracing::info!(
        config_file = ?cli.config,
        bind_address = %config.listener.bind_address,
        upstream_timeout_secs = config.timeouts.upstream_secs,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    let secrets = AuthSecrets::from_env()?;

    if config.observability.metrics_enabled {
        // Address already checked by validate_config.
        if let Ok(addr) = config.observability.metrics_address.parse() {
            metrics::init_metrics(addr);
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(
        address = %listener.local_addr()?,
        "Listening for connections"
    );

    let shutdown = Shutdown::new();
    spawn_signal_handler(shutdown.clone());

    let server = HttpServer::new(config, secrets)?;
    server.run(listener, shutdown.wait()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
