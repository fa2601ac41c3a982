use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SummarizerError {
    #[error("request to generation API failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("generation API returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("failed to decode generation API response: {0}")]
    Decode(#[source] reqwest::Error),
}

/// Turns a prompt into generated text with a single remote call.
/// No partial output is returned on failure.
#[async_trait]
pub trait Summarizer: Send + Sync {
    async fn summarize(&self, prompt: &str) -> Result<String, SummarizerError>;
}
