mod config;
mod middleware;
mod routes;

use anyhow::Context;
use clap::Parser;
use nook_inference::HuggingFaceRewriter;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use config::Config;

#[derive(Parser)]
#[command(name = "story-nook")]
#[command(about = "The Story Nook API - story writing helper endpoints")]
struct Args {
    /// TOML config file; built-in defaults are used when omitted
    #[arg(short, long)]
    config: Option<String>,

    /// Overrides `server.port`
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = match args.config.as_deref() {
        Some(path) => match Config::load(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Failed to load config: {}", e);
                std::process::exit(1);
            }
        },
        None => Config::default(),
    };

    if let Some(port) = args.port {
        config.server.port = port;
    }

    init_tracing(&config.server.log_level);

    info!(config_path = ?args.config, "Starting Story Nook API");

    let api_key = config.inference.resolved_api_key();
    if api_key.is_none() {
        warn!("No inference API key configured - grammar-check and paraphrase requests will be sent without credentials");
    }

    let rewriter = match HuggingFaceRewriter::new(config.inference.to_settings(api_key)) {
        Ok(r) => Arc::new(r),
        Err(e) => {
            error!(error = %e, "Failed to initialize inference client");
            std::process::exit(1);
        }
    };

    info!(
        api_url = %config.inference.api_url,
        grammar_model = %config.inference.grammar_model,
        paraphrase_model = %config.inference.paraphrase_model,
        "Inference relay configured"
    );

    let app = routes::app(rewriter);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!(address = %addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received. Shutting down...");
}

fn init_tracing(level: &str) {
    let filter = match level.to_lowercase().as_str() {
        "trace" => tracing::Level::TRACE,
        "debug" => tracing::Level::DEBUG,
        "info" => tracing::Level::INFO,
        "warn" => tracing::Level::WARN,
        "error" => tracing::Level::ERROR,
        _ => tracing::Level::INFO,
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false),
        )
        .with(tracing_subscriber::filter::LevelFilter::from_level(filter))
        .init();
}
