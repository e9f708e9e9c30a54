//! Microversion negotiation server.
//!
//! Serves `/`, which reports the microversion negotiated for the request,
//! behind the microversion middleware.

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;
use tokio::sync::mpsc;

use microversion_parse::config::{load_config, ConfigWatcher, MicroversionConfig};
use microversion_parse::http::MicroversionServer;
use microversion_parse::lifecycle::Shutdown;
use microversion_parse::observability::{logging, metrics};

#[derive(Parser)]
#[command(name = "microversion-parse")]
#[command(about = "Serve OpenStack-style API microversion negotiation", long_about = None)]
struct Cli {
    /// TOML configuration file. Built-in defaults are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Reload the configuration file when it changes.
    #[arg(short, long, requires = "config")]
    watch: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => MicroversionConfig::default(),
    };

    logging::init_logging(&config.observability)?;
    tracing::info!("microversion-parse v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        service_type = %config.service.service_type,
        versions = ?config.service.versions,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        metrics::init_metrics(config.observability.metrics_address.parse()?)?;
    }

    let (config_updates, _watcher) = match (&cli.config, cli.watch) {
        (Some(path), true) => {
            let (watcher, updates) = ConfigWatcher::new(path);
            (updates, Some(watcher.run()?))
        }
        _ => (mpsc::unbounded_channel().1, None),
    };

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server = MicroversionServer::new(config)?;
    server.run(listener, config_updates, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
