//! Structured health record produced from a voice transcript

use std::fmt;

use serde::{Deserialize, Serialize};

/// Summary used when the model produced no usable text
pub const SUMMARY_PLACEHOLDER: &str = "Unable to generate summary from voice input.";

/// Mental state used when the model did not report one
pub const UNKNOWN_STATE: &str = "unknown";

/// Overall severity reported for one health update
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Low,
    Medium,
    High,
}

impl Severity {
    /// Get the string representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A medication mention with its timing description
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Medication {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub timing: String,
}

/// Structured health data extracted from one voice note.
///
/// Every field except `raw_transcript` originates from a language model
/// and carries no structural guarantees beyond its type. `raw_transcript`
/// is set by the extraction pipeline itself and always equals the
/// submitted transcript.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HealthRecord {
    #[serde(default)]
    pub symptoms: Vec<String>,
    #[serde(default)]
    pub medications: Vec<Medication>,
    #[serde(default = "unknown_state")]
    pub mental_state: String,
    #[serde(default)]
    pub lifestyle_notes: Vec<String>,
    #[serde(default)]
    pub severity: Severity,
    #[serde(default)]
    pub doctor_summary: String,
    #[serde(default)]
    pub raw_transcript: String,
}

fn unknown_state() -> String {
    UNKNOWN_STATE.to_string()
}

impl HealthRecord {
    /// Build the deterministic fallback record for a model reply that
    /// could not be parsed. The raw reply becomes the doctor summary so
    /// no model output is silently discarded.
    pub fn fallback(reply: &str) -> Self {
        let summary = if reply.trim().is_empty() {
            SUMMARY_PLACEHOLDER.to_string()
        } else {
            reply.to_string()
        };

        Self {
            symptoms: Vec::new(),
            medications: Vec::new(),
            mental_state: UNKNOWN_STATE.to_string(),
            lifestyle_notes: Vec::new(),
            severity: Severity::Low,
            doctor_summary: summary,
            raw_transcript: String::new(),
        }
    }

    /// Fill in fields the model left blank. The doctor summary must
    /// never be empty, and mental state defaults to "unknown".
    pub fn normalize(&mut self) {
        if self.doctor_summary.trim().is_empty() {
            self.doctor_summary = SUMMARY_PLACEHOLDER.to_string();
        }
        if self.mental_state.trim().is_empty() {
            self.mental_state = UNKNOWN_STATE.to_string();
        }
    }

    /// One-line summary of what was detected, for user notifications
    pub fn detection_summary(&self) -> String {
        format!(
            "Detected {} symptoms and {} medications.",
            self.symptoms.len(),
            self.medications.len()
        )
    }
}
