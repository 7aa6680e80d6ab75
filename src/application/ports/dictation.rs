//! Dictation port interface
//!
//! Speech-to-text is an external push source with no backpressure. It
//! is modelled as an event channel so any backend (browser bridge,
//! stdin feed, test fixture) can drive the capture controller without
//! the state machine knowing about it.

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::mpsc;

/// Incremental updates from a dictation backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictationEvent {
    /// A partial or final piece of recognized speech
    Speech(String),
    /// The backend stopped delivering speech on its own
    Stopped,
}

/// Receiving half of a dictation event channel
pub type DictationStream = mpsc::UnboundedReceiver<DictationEvent>;

/// Dictation errors
#[derive(Debug, Clone, Error)]
pub enum DictationError {
    #[error("Voice capture is not supported in this environment")]
    Unsupported,

    #[error("Microphone permission denied. Allow microphone access and try again.")]
    PermissionDenied,

    #[error("Failed to start voice capture: {0}")]
    StartFailed(String),
}

/// Port for a speech-to-text event source
#[async_trait]
pub trait DictationSource: Send + Sync {
    /// Whether dictation is available in the current environment.
    /// Must be checked before `start` is invoked.
    fn is_supported(&self) -> bool;

    /// Begin listening and return the event stream for this recording
    async fn start(&self) -> Result<DictationStream, DictationError>;

    /// Stop listening. Events already queued may still be delivered.
    async fn stop(&self);
}
