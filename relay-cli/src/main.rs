use anyhow::{Context, Result, anyhow};
use clap::Parser;
use relay_server::{AppState, DEFAULT_OUTBOUND_CAPACITY, RelayConfig};
use std::net::SocketAddr;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "signal-relay")]
#[command(version, about = "Relays WebRTC signaling messages between peers in a room")]
struct Cli {
    /// Address to accept HTTP and WebSocket connections on.
    #[arg(short, long, env = "RELAY_LISTEN_ADDR", default_value = "0.0.0.0:8080")]
    listen: SocketAddr,

    /// Frames buffered per peer before further frames to it are dropped.
    #[arg(long, env = "RELAY_OUTBOUND_CAPACITY", default_value_t = DEFAULT_OUTBOUND_CAPACITY)]
    outbound_capacity: usize,

    /// Log filter used when RUST_LOG is not set.
    #[arg(long, env = "RELAY_LOG", default_value = "info")]
    log_filter: String,
}

impl Cli {
    fn config(&self) -> RelayConfig {
        RelayConfig {
            listen_addr: self.listen,
            outbound_capacity: self.outbound_capacity,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_filter)?;

    info!("Initializing signaling relay...");

    relay_server::serve(AppState::new(cli.config()), shutdown_signal())
        .await
        .context("Signaling relay failed")?;

    info!("Signaling relay stopped");
    Ok(())
}

fn init_tracing(fallback: &str) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(fallback)
            .with_context(|| format!("Invalid log filter '{}'", fallback))?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| anyhow!("Failed to install tracing subscriber: {}", e))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
