use crate::summarizer::SummarizerError;
use thiserror::Error;

/// Failure of one `/summarize` run, tagged by the stage that broke.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Error reading JSON: {0}")]
    Io(#[from] std::io::Error),

    #[error("Error summarizing data: invalid news data: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Error summarizing data: {0}")]
    Api(#[from] SummarizerError),
}

impl PipelineError {
    pub fn stage(&self) -> &'static str {
        match self {
            PipelineError::Io(_) => "load",
            PipelineError::Decode(_) => "decode",
            PipelineError::Api(_) => "summarize",
        }
    }
}
