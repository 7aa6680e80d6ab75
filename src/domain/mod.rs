//! Domain layer - Core business logic
//!
//! Contains value objects, entities, and domain errors.
//! This layer has no dependencies on external systems.

pub mod capture;
pub mod config;
pub mod error;
pub mod extraction;
pub mod record;

// Re-export common types
pub use capture::{CaptureSession, CaptureState, StopOutcome};
pub use config::AppConfig;
pub use error::*;
pub use extraction::{resolve_reply, Extraction};
pub use record::{HealthRecord, Medication, Severity};
