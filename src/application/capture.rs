//! Capture controller use case
//!
//! Coordinates one voice journaling round-trip: dictation events feed
//! the session transcript, stop hands the transcript to the extractor,
//! and the outcome is pushed to a record sink. At most one extraction
//! is in flight per controller; the session state machine enforces it.

use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::domain::capture::{CaptureSession, CaptureState, SessionError, StopOutcome};
use crate::domain::extraction::Extraction;

use super::ports::{
    DictationError, DictationEvent, DictationSource, DictationStream, ExtractionError, Extractor,
    RecordSink,
};

/// Errors surfaced by the capture controller
#[derive(Debug, Error)]
pub enum CaptureError {
    #[error(transparent)]
    Dictation(#[from] DictationError),

    #[error("No speech detected. Speak about your health before stopping the recording.")]
    NoSpeech,

    #[error("Cannot {action} while in {state} state")]
    Busy {
        state: CaptureState,
        action: &'static str,
    },

    #[error(transparent)]
    Extraction(#[from] ExtractionError),
}

impl From<SessionError> for CaptureError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::Unsupported => Self::Dictation(DictationError::Unsupported),
            SessionError::InvalidTransition {
                current_state,
                action,
            } => Self::Busy {
                state: current_state,
                action,
            },
        }
    }
}

/// How long a terminal display state stays visible before the session
/// returns to idle
#[derive(Debug, Clone, Copy)]
pub struct ResetDelays {
    pub success: Duration,
    pub error: Duration,
}

impl Default for ResetDelays {
    fn default() -> Self {
        Self {
            success: Duration::from_millis(1500),
            error: Duration::from_millis(2000),
        }
    }
}

/// Capture controller.
///
/// Owns the session state machine and the scheduled-reset timer; the
/// dictation source, extractor, and sink are injected collaborators.
pub struct CaptureController<D, X, S>
where
    D: DictationSource,
    X: Extractor,
    S: RecordSink,
{
    source: D,
    extractor: X,
    sink: S,
    session: Arc<Mutex<CaptureSession>>,
    reset_task: Mutex<Option<JoinHandle<()>>>,
    delays: ResetDelays,
}

impl<D, X, S> CaptureController<D, X, S>
where
    D: DictationSource,
    X: Extractor,
    S: RecordSink,
{
    /// Create a controller with the default display delays
    pub fn new(source: D, extractor: X, sink: S) -> Self {
        Self::with_delays(source, extractor, sink, ResetDelays::default())
    }

    /// Create a controller with custom display delays
    pub fn with_delays(source: D, extractor: X, sink: S, delays: ResetDelays) -> Self {
        let supported = source.is_supported();
        Self {
            source,
            extractor,
            sink,
            session: Arc::new(Mutex::new(CaptureSession::new(supported))),
            reset_task: Mutex::new(None),
            delays,
        }
    }

    /// Get the current session state
    pub async fn state(&self) -> CaptureState {
        self.session.lock().await.state()
    }

    /// Get the accumulated transcript
    pub async fn transcript(&self) -> String {
        self.session.lock().await.transcript().to_string()
    }

    /// Begin a recording and return the dictation event stream.
    ///
    /// Rejected while a round-trip is underway (recording, processing,
    /// or showing success). A pending error display is pre-empted: the
    /// delayed reset is cancelled and applied immediately so the new
    /// recording starts from idle with the preserved transcript.
    pub async fn start(&self) -> Result<DictationStream, CaptureError> {
        {
            let mut session = self.session.lock().await;
            if session.state() == CaptureState::Error {
                self.cancel_scheduled_reset().await;
                let _ = session.reset();
            }
            session.start_recording()?;
        }

        match self.source.start().await {
            Ok(stream) => Ok(stream),
            Err(err) => {
                // Roll back so the session is usable after e.g. a
                // denied microphone permission
                let _ = self.session.lock().await.cancel_recording();
                Err(err.into())
            }
        }
    }

    /// Feed one dictation event into the session.
    /// Speech arriving outside the recording state is dropped.
    pub async fn handle_event(&self, event: DictationEvent) {
        if let DictationEvent::Speech(segment) = event {
            self.session.lock().await.append(&segment);
        }
    }

    /// Stop recording and run the extraction round-trip.
    ///
    /// A blank transcript returns the session to idle without calling
    /// the extractor. Otherwise the session stays in processing until
    /// the extractor answers, then shows success or error and schedules
    /// the delayed return to idle.
    pub async fn stop(&self) -> Result<Extraction, CaptureError> {
        let outcome = self.session.lock().await.stop_recording()?;
        self.source.stop().await;

        let transcript = match outcome {
            StopOutcome::NoSpeech => return Err(CaptureError::NoSpeech),
            StopOutcome::Submitted(text) => text,
        };

        match self.extractor.extract(&transcript).await {
            Ok(extraction) => {
                self.session.lock().await.complete()?;
                debug!(recovered = extraction.is_recovered(), "record ready");
                self.sink.record_ready(&extraction).await;
                self.schedule_reset(self.delays.success).await;
                Ok(extraction)
            }
            Err(err) => {
                self.session.lock().await.fail()?;
                self.sink.capture_failed(&err.to_string()).await;
                self.schedule_reset(self.delays.error).await;
                Err(err.into())
            }
        }
    }

    /// Schedule the delayed transition back to idle, replacing any
    /// previously scheduled one
    async fn schedule_reset(&self, delay: Duration) {
        let session = Arc::clone(&self.session);
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = session.lock().await.reset();
        });

        if let Some(previous) = self.reset_task.lock().await.replace(handle) {
            previous.abort();
        }
    }

    async fn cancel_scheduled_reset(&self) {
        if let Some(handle) = self.reset_task.lock().await.take() {
            handle.abort();
        }
    }
}
