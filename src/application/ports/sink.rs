//! Record sink port interface

use async_trait::async_trait;

use crate::domain::extraction::Extraction;

/// Port for downstream display collaborators.
///
/// The capture controller hands every round-trip outcome to a sink;
/// dashboards, pages, or a terminal presenter subscribe through it.
#[async_trait]
pub trait RecordSink: Send + Sync {
    /// A new record is ready (clean parse or recovered fallback)
    async fn record_ready(&self, extraction: &Extraction);

    /// The round-trip failed with a human-readable reason
    async fn capture_failed(&self, reason: &str);
}
