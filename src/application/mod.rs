//! Application layer - Use cases and port interfaces
//!
//! Contains the core business operations and trait definitions
//! for external system interactions.

pub mod capture;
pub mod extract;
pub mod ports;

// Re-export use cases
pub use capture::{CaptureController, CaptureError, ResetDelays};
pub use extract::ExtractionService;
pub use ports::{ExtractionError, Extractor};
