//! Moniker server - event-driven AI username generation.
//!
//! Wires the event bus, the generation and recording steps, and the HTTP
//! API, then serves until Ctrl-C.

use clap::Parser;
use moniker_models::{DEFAULT_GEMINI_MODEL, GeminiClient};
use moniker_server::{
    DEFAULT_CHANNEL_CAPACITY, EventBus, ServerConfig, StepRunner, UsernameGenerator,
    UsernameRecorder, UsernameStore, create_router,
};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Command-line arguments for the moniker server.
#[derive(Parser, Debug)]
#[command(name = "moniker-server")]
#[command(about = "Moniker - AI-assisted username generation service")]
#[command(version)]
struct Args {
    /// Address to bind the HTTP listener to
    #[arg(long, env = "MONIKER_ADDR", default_value = "127.0.0.1:3000")]
    addr: String,

    /// Gemini API key; when absent, requests report a missing credential
    #[arg(long, env = "GEMINI_API_KEY")]
    gemini_api_key: Option<String>,

    /// Gemini model identifier
    #[arg(long, env = "GEMINI_MODEL", default_value = DEFAULT_GEMINI_MODEL)]
    model: String,

    /// Per-topic event bus channel capacity
    #[arg(long, default_value_t = DEFAULT_CHANNEL_CAPACITY)]
    channel_capacity: usize,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    info!("Starting Moniker server");

    let config = ServerConfig::builder()
        .addr(args.addr)
        .model(args.model)
        .channel_capacity(args.channel_capacity)
        .build();

    let driver = match args.gemini_api_key {
        Some(key) => Some(GeminiClient::new(key, config.model().clone())),
        None => {
            warn!("GEMINI_API_KEY not set - generation requests will report a missing credential");
            None
        }
    };

    let bus = EventBus::new(*config.channel_capacity());
    let store = UsernameStore::new();

    let mut runner = StepRunner::new(bus.clone());
    runner.add_step(Arc::new(UsernameGenerator::new(driver, bus.clone())));
    runner.add_step(Arc::new(UsernameRecorder::new(store.clone())));
    runner.start().await;

    let router = create_router(bus, store);
    let listener = tokio::net::TcpListener::bind(config.addr()).await?;
    info!(addr = %config.addr(), model = %config.model(), "Listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Moniker server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = ?e, "Failed to listen for shutdown signal");
        return;
    }
    info!("Shutdown signal received");
}
