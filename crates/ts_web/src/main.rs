use std::net::SocketAddr;

use clap::Parser;
use tracing::{error, info};
use ts_core::logging::init_logging;
use ts_core::ConfigResolver;
use ts_inference::ModelKind;
use ts_web::{create_app, AppState};

#[derive(Parser, Debug)]
#[command(author, version, about = "Interactive page for the text summarizer", long_about = None)]
struct Args {
    /// Address the page is served on
    #[arg(long, env = "TS_WEB_ADDR", default_value = "127.0.0.1:8501")]
    addr: SocketAddr,

    #[arg(long, env = "TS_MODEL_KIND", value_enum, default_value_t = ModelKind::HuggingFace)]
    model_kind: ModelKind,
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
    }
    info!("Shutting down");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let args = Args::parse();

    let config = ConfigResolver::resolve();
    if let Err(e) = &config {
        error!("⚠️ Configuration Error: {}", e);
    }
    let state = AppState::from_config(config, args.model_kind)?;

    let listener = tokio::net::TcpListener::bind(args.addr).await?;
    info!("📝 Summarizer page listening on http://{}", listener.local_addr()?);

    axum::serve(listener, create_app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
