//! Extraction port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::extraction::Extraction;

/// Extraction errors surfaced to callers.
///
/// Malformed model output is deliberately absent: it resolves to a
/// recovered record, never an error.
#[derive(Debug, Clone, Error)]
pub enum ExtractionError {
    #[error("No transcript provided")]
    Validation,

    #[error("Rate limit exceeded. Please try again later.")]
    RateLimited,

    #[error("Usage limit reached. Please add credits.")]
    QuotaExceeded,

    #[error("AI gateway error: {0}")]
    Upstream(String),

    #[error("Missing API key. Set VITALVOICE_API_KEY or run 'vitalvoice config set api_key <key>'")]
    Configuration,
}

/// Port for resolving a transcript into a structured health record
#[async_trait]
pub trait Extractor: Send + Sync {
    /// Extract structured health data from one transcript.
    ///
    /// # Returns
    /// A parsed or recovered record, or a distinguishable error --
    /// never both, and never a half-populated record.
    async fn extract(&self, transcript: &str) -> Result<Extraction, ExtractionError>;
}
