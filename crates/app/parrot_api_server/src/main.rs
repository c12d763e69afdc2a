//! Parrot mock chat backend.
//!
//! Serves `POST /api/chat` and `GET /health`. Prints `{"port": N}` to stdout
//! once bound so scripts can discover an ephemeral port.

use std::time::Duration;

use clap::Parser;
use parrot_api::config::{ApiConfig, DEFAULT_PORT, join_host_port};
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "info,parrot_api=debug,parrot_core=debug";

/// CLI arguments. Each flag overrides the matching environment variable.
#[derive(Parser, Debug)]
#[command(name = "parrot_api_server", about = "Parrot mock chat backend", version)]
struct Args {
    /// Port to listen on (0 = ephemeral). Defaults to `PORT` or 3001.
    #[arg(long)]
    port: Option<u16>,

    /// Interface to bind. Defaults to `BIND_HOST` or 0.0.0.0.
    #[arg(long)]
    host: Option<String>,

    /// Simulated reply delay in milliseconds. Defaults to
    /// `PARROT_RESPONSE_DELAY_MS` or 500.
    #[arg(long)]
    delay_ms: Option<u64>,
}

impl Args {
    /// Applies command-line overrides on top of the environment config.
    fn apply(self, mut config: ApiConfig) -> ApiConfig {
        if self.port.is_some() || self.host.is_some() {
            let (env_host, env_port) = split_bind_addr(&config.bind_addr);
            let host = self.host.unwrap_or(env_host);
            let port = self.port.unwrap_or(env_port);
            config.bind_addr = join_host_port(&host, port);
        }
        if let Some(ms) = self.delay_ms {
            config.response_delay = Duration::from_millis(ms);
        }
        config
    }
}

/// Splits `host:port` or `[v6]:port`. The host keeps its brackets.
fn split_bind_addr(addr: &str) -> (String, u16) {
    match addr.rsplit_once(':') {
        Some((host, port)) if !host.is_empty() && (!host.contains(':') || host.ends_with(']')) => {
            (host.to_string(), port.parse().unwrap_or(DEFAULT_PORT))
        }
        _ => (addr.to_string(), DEFAULT_PORT),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    // Logs go to stderr so stdout carries only the port message.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let args = Args::parse();
    let config = args.apply(ApiConfig::from_env());

    info!(
        version = parrot_core::version(),
        bind_addr = %config.bind_addr,
        delay_ms = config.response_delay.as_millis() as u64,
        "starting parrot_api_server"
    );
    if config.openai_api_key.is_none() {
        info!("OPENAI_API_KEY not set, serving canned responses only");
    }

    let state = parrot_api::AppState::new(config.clone());
    let app = parrot_api::router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    let local_addr = listener.local_addr()?;

    println!("{}", serde_json::json!({ "port": local_addr.port() }));

    info!(addr = %local_addr, "REST API listening");
    info!("chat endpoint: http://{local_addr}/api/chat");
    info!("health check: http://{local_addr}/health");

    let shutdown = CancellationToken::new();
    tokio::spawn({
        let shutdown = shutdown.clone();
        async move {
            match tokio::signal::ctrl_c().await {
                Ok(()) => info!("interrupt received, shutting down"),
                Err(e) => warn!(error = %e, "failed to listen for interrupt"),
            }
            shutdown.cancel();
        }
    });

    axum::serve(listener, app)
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await?;

    info!("server stopped");
    Ok(())
}
