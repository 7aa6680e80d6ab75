//! Capture session state machine

use std::fmt;
use thiserror::Error;

/// Capture states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CaptureState {
    #[default]
    Idle,
    Recording,
    Processing,
    Success,
    Error,
}

impl CaptureState {
    /// Get the string representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Recording => "recording",
            Self::Processing => "processing",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for CaptureState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Errors from invalid session operations
#[derive(Debug, Clone, Error)]
pub enum SessionError {
    #[error("Voice capture is not supported in this environment")]
    Unsupported,

    #[error("Invalid state transition: cannot {action} while in {current_state} state")]
    InvalidTransition {
        current_state: CaptureState,
        action: &'static str,
    },
}

/// Result of stopping a recording
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StopOutcome {
    /// Transcript was non-blank; session moved to processing
    Submitted(String),
    /// Transcript was blank; session returned to idle, nothing to extract
    NoSpeech,
}

/// Capture session entity.
/// Manages state transitions for one voice recording round-trip.
///
/// State machine:
///   IDLE -> RECORDING (start_recording, requires capability)
///   RECORDING -> RECORDING (append, accumulates transcript)
///   RECORDING -> PROCESSING (stop_recording with non-blank transcript)
///   RECORDING -> IDLE (stop_recording with blank transcript, or cancel)
///   PROCESSING -> SUCCESS (complete)
///   PROCESSING -> ERROR (fail)
///   SUCCESS -> IDLE (reset, clears transcript)
///   ERROR -> IDLE (reset, preserves transcript for retry)
#[derive(Debug)]
pub struct CaptureSession {
    state: CaptureState,
    transcript: String,
    supported: bool,
}

impl CaptureSession {
    /// Create a new session in idle state.
    /// `supported` reflects whether a dictation capability is available;
    /// when false, recording can never start.
    pub fn new(supported: bool) -> Self {
        Self {
            state: CaptureState::Idle,
            transcript: String::new(),
            supported,
        }
    }

    /// Get the current state
    pub fn state(&self) -> CaptureState {
        self.state
    }

    /// Get the accumulated transcript
    pub fn transcript(&self) -> &str {
        &self.transcript
    }

    /// Whether the dictation capability is available
    pub fn is_supported(&self) -> bool {
        self.supported
    }

    /// Check if currently idle
    pub fn is_idle(&self) -> bool {
        self.state == CaptureState::Idle
    }

    /// Check if currently recording
    pub fn is_recording(&self) -> bool {
        self.state == CaptureState::Recording
    }

    /// Check if currently processing
    pub fn is_processing(&self) -> bool {
        self.state == CaptureState::Processing
    }

    /// Transition from IDLE to RECORDING.
    /// Fails fast when dictation is unavailable or a round-trip is
    /// already underway (no duplicate submissions per session).
    pub fn start_recording(&mut self) -> Result<(), SessionError> {
        if !self.supported {
            return Err(SessionError::Unsupported);
        }
        if self.state != CaptureState::Idle {
            return Err(SessionError::InvalidTransition {
                current_state: self.state,
                action: "start recording",
            });
        }
        self.state = CaptureState::Recording;
        Ok(())
    }

    /// Append a dictation update to the transcript.
    /// Only meaningful while RECORDING; updates arriving in any other
    /// state are dropped so late events cannot corrupt a submission.
    pub fn append(&mut self, segment: &str) {
        if self.state != CaptureState::Recording {
            return;
        }
        let segment = segment.trim();
        if segment.is_empty() {
            return;
        }
        if !self.transcript.is_empty() {
            self.transcript.push(' ');
        }
        self.transcript.push_str(segment);
    }

    /// Transition out of RECORDING.
    /// A non-blank transcript moves to PROCESSING and is handed back for
    /// extraction; a blank one returns straight to IDLE.
    pub fn stop_recording(&mut self) -> Result<StopOutcome, SessionError> {
        if self.state != CaptureState::Recording {
            return Err(SessionError::InvalidTransition {
                current_state: self.state,
                action: "stop recording",
            });
        }

        if self.transcript.trim().is_empty() {
            self.state = CaptureState::Idle;
            self.transcript.clear();
            return Ok(StopOutcome::NoSpeech);
        }

        self.state = CaptureState::Processing;
        Ok(StopOutcome::Submitted(self.transcript.clone()))
    }

    /// Transition from RECORDING to IDLE without extraction
    pub fn cancel_recording(&mut self) -> Result<(), SessionError> {
        if self.state != CaptureState::Recording {
            return Err(SessionError::InvalidTransition {
                current_state: self.state,
                action: "cancel recording",
            });
        }
        self.state = CaptureState::Idle;
        Ok(())
    }

    /// Transition from PROCESSING to SUCCESS
    pub fn complete(&mut self) -> Result<(), SessionError> {
        if self.state != CaptureState::Processing {
            return Err(SessionError::InvalidTransition {
                current_state: self.state,
                action: "complete processing",
            });
        }
        self.state = CaptureState::Success;
        Ok(())
    }

    /// Transition from PROCESSING to ERROR
    pub fn fail(&mut self) -> Result<(), SessionError> {
        if self.state != CaptureState::Processing {
            return Err(SessionError::InvalidTransition {
                current_state: self.state,
                action: "record failure",
            });
        }
        self.state = CaptureState::Error;
        Ok(())
    }

    /// Transition from SUCCESS or ERROR back to IDLE.
    /// The transcript is cleared only after confirmed success; on error
    /// it is preserved so the user can resubmit.
    pub fn reset(&mut self) -> Result<(), SessionError> {
        match self.state {
            CaptureState::Success => {
                self.transcript.clear();
                self.state = CaptureState::Idle;
                Ok(())
            }
            CaptureState::Error => {
                self.state = CaptureState::Idle;
                Ok(())
            }
            current_state => Err(SessionError::InvalidTransition {
                current_state,
                action: "reset",
            }),
        }
    }
}
