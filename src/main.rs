use anyhow::{Context, Result};
use clap::Parser;
use ingredient_scanner_proxy::ai::GeminiClient;
use ingredient_scanner_proxy::config::Config;
use ingredient_scanner_proxy::server::{self, AppState};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "ingredient-scanner-proxy")]
#[command(about = "Relay ingredient label photos to Gemini for analysis")]
struct CliArgs {
    /// Port to listen on. Overrides the PORT environment variable.
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ingredient_scanner_proxy=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = CliArgs::parse();

    let mut config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };
    if let Some(port) = args.port {
        config.port = port;
    }

    let state = AppState::new(Arc::new(GeminiClient::new(config.gemini_api_key.clone())));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("Gemini proxy server listening on port {}", config.port);

    server::serve(listener, state).await?;
    Ok(())
}
