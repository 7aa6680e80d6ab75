//! Chat-completion port interface

use async_trait::async_trait;
use thiserror::Error;

/// Completion endpoint errors
#[derive(Debug, Clone, Error)]
pub enum CompletionError {
    #[error("Rate limit exceeded. Please try again later.")]
    RateLimited,

    #[error("Usage limit reached. Please add credits.")]
    QuotaExceeded,

    #[error("AI gateway request failed: {0}")]
    RequestFailed(String),

    #[error("AI gateway error: HTTP {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Failed to parse AI gateway response: {0}")]
    ParseError(String),

    #[error("Empty completion response")]
    EmptyResponse,
}

/// Port for a chat-completion model endpoint
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Send one system instruction plus user message and return the
    /// model's raw text reply.
    async fn complete(&self, system: &str, user: &str) -> Result<String, CompletionError>;
}
