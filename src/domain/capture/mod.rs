//! Voice capture session state machine

mod session;

pub use session::{CaptureSession, CaptureState, SessionError, StopOutcome};
