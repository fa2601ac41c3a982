mod api;
mod config;
mod error;
mod gemini;
mod news;
mod prompt;
mod summarizer;

use anyhow::{Context, Result};
use dotenv::dotenv;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();
    dotenv().ok();

    let config = config::Config::from_env()?;
    tracing::debug!(?config, "configuration loaded");

    // Generation API client, shared by every request
    let gemini = gemini::GeminiClient::new(
        config.api_key.clone(),
        config.model.clone(),
        config.base_url.clone(),
        config.timeout,
    )
    .context("failed to build Gemini client")?;

    let app = api::routes(api::AppState {
        summarizer: Arc::new(gemini),
        data_path: config.data_path.clone(),
        static_dir: config.static_dir.clone(),
    })
    .layer(TraceLayer::new_for_http());

    // Bind
    let addr = config.bind_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!("Server is running on http://{}", addr);
    axum::serve(listener, app).await?;
    Ok(())
}
