mod config;
mod errors;
mod export;
mod extract;
mod ingest;
mod llm_client;
mod models;
mod render;
mod routes;
mod state;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::export::netlify::{NetlifyClient, SiteDeployer};
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Folio API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize LLM client
    let llm = LlmClient::new(
        config.groq_api_key.clone(),
        config.groq_model.clone(),
        config.groq_api_url.clone(),
    )
    .context("Failed to build LLM HTTP client")?;
    info!("LLM client initialized (model: {})", llm.model());

    // Initialize deploy client
    let deployer: Arc<dyn SiteDeployer> = Arc::new(
        NetlifyClient::new(config.netlify_api_url.clone())
            .context("Failed to build Netlify HTTP client")?,
    );
    info!("Netlify client initialized ({})", config.netlify_api_url);

    let state = AppState {
        llm,
        deployer,
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
