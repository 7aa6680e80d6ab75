//! Health extraction use case

use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::domain::extraction::{prompt, resolve_reply, Extraction};

use super::ports::{CompletionClient, CompletionError, ExtractionError, Extractor};

impl From<CompletionError> for ExtractionError {
    fn from(err: CompletionError) -> Self {
        match err {
            CompletionError::RateLimited => Self::RateLimited,
            CompletionError::QuotaExceeded => Self::QuotaExceeded,
            other => Self::Upstream(other.to_string()),
        }
    }
}

/// Stateless transcript-to-record extraction service.
///
/// One instance serves any number of concurrent callers; per-session
/// serialization is the capture controller's job.
pub struct ExtractionService<C: CompletionClient> {
    client: C,
}

impl<C: CompletionClient> ExtractionService<C> {
    /// Create a new extraction service over a completion client
    pub fn new(client: C) -> Self {
        Self { client }
    }
}

#[async_trait]
impl<C: CompletionClient> Extractor for ExtractionService<C> {
    async fn extract(&self, transcript: &str) -> Result<Extraction, ExtractionError> {
        // Callers validate too; reject blank input here regardless
        if transcript.trim().is_empty() {
            return Err(ExtractionError::Validation);
        }

        info!(chars = transcript.len(), "analyzing health transcript");

        let reply = self
            .client
            .complete(prompt::SYSTEM, &prompt::user_content(transcript))
            .await?;

        debug!(reply = %reply, "model reply");

        let extraction = resolve_reply(&reply, transcript);
        if extraction.is_recovered() {
            warn!("model reply was not valid JSON; returning fallback record");
        }

        Ok(extraction)
    }
}
