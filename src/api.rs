use crate::error::PipelineError;
use crate::news;
use crate::prompt;
use crate::summarizer::Summarizer;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use serde_json::value::RawValue;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::services::ServeDir;

#[derive(Clone)]
pub struct AppState {
    pub summarizer: Arc<dyn Summarizer>,
    pub data_path: PathBuf,
    pub static_dir: PathBuf,
}

pub fn routes(state: AppState) -> Router {
    let assets = ServeDir::new(&state.static_dir);
    Router::new()
        .route("/", get(index))
        .route(
            "/summarize",
            get(summarize)
                .head(method_not_allowed)
                .fallback(method_not_allowed),
        )
        .nest_service("/static", assets)
        .with_state(Arc::new(state))
}

// -------------------------------------------------------------------
// Pages

async fn index(State(state): State<Arc<AppState>>) -> Result<Html<String>, ApiError> {
    let path = state.static_dir.join("index.html");
    let page = tokio::fs::read_to_string(&path).await.map_err(|e| {
        tracing::error!(path = %path.display(), error = %e, "index page unavailable");
        ApiError::internal(format!("Error rendering page: {e}"))
    })?;
    Ok(Html(page))
}

// -------------------------------------------------------------------
// Summaries

#[derive(Serialize)]
pub struct SummaryResponse {
    original_data: Box<RawValue>,
    summary: String,
}

async fn summarize(State(state): State<Arc<AppState>>) -> Result<Json<SummaryResponse>, ApiError> {
    let res = run_pipeline(&state).await.map_err(|e| {
        tracing::error!(stage = e.stage(), error = %e, "summarize failed");
        ApiError::internal(e)
    })?;
    Ok(Json(res))
}

/// Load, decode, prompt, generate. Each stage runs only if the previous
/// one succeeded.
async fn run_pipeline(state: &AppState) -> Result<SummaryResponse, PipelineError> {
    let data = news::read_json(&state.data_path).await?;
    let items = news::decode_items(&data)?;
    let original_data: Box<RawValue> = serde_json::from_slice(&data)?;

    let prompt = prompt::build_prompt(&items);
    tracing::info!(items = items.len(), prompt_chars = prompt.len(), "prompt built");

    let summary = state.summarizer.summarize(&prompt).await?;
    tracing::info!(summary_chars = summary.len(), "summary generated");

    Ok(SummaryResponse { original_data, summary })
}

async fn method_not_allowed() -> ApiError {
    ApiError::new(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
}

// -------------------------------------------------------------------
// Errors

#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self { status, message: message.into() }
    }
    fn internal(e: impl std::fmt::Display) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}
