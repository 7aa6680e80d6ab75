//! Health record value objects

mod health_record;

pub use health_record::{HealthRecord, Medication, Severity, SUMMARY_PLACEHOLDER, UNKNOWN_STATE};
