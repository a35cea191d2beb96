use anyhow::Context;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use kemibot::config::Config;
use kemibot::llm::FallbackChain;
use kemibot::server::{AppState, build_app};

#[derive(Parser)]
#[command(name = "kemibot", version, about = "Chemistry tutoring chat backend")]
struct Args {
    /// Listen port (overrides the PORT environment variable).
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let mut config = Config::from_env().context("failed to load configuration")?;
    if let Some(port) = args.port {
        config.port = port;
    }

    if !config.groq_configured() && !config.deepseek_configured() {
        warn!("no provider API keys configured; chat requests will be rejected upstream");
    }

    let state = AppState {
        chat: FallbackChain::from_config(&config),
        groq_configured: config.groq_configured(),
        deepseek_configured: config.deepseek_configured(),
    };
    let app = build_app(state);

    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port))
        .await
        .with_context(|| format!("failed to bind {}:{}", config.host, config.port))?;
    info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
