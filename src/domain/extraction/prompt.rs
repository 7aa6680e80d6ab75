//! Fixed instruction prompt for the health extraction model

/// System instruction describing the exact JSON shape the model must
/// return. The six fields mirror [`crate::domain::record::HealthRecord`]
/// minus `raw_transcript`, which the pipeline sets itself.
pub const SYSTEM: &str = r#"You are a medical assistant AI that analyzes health voice notes.

Convert the user's health voice note into structured medical data.

ALWAYS respond with valid JSON in this exact format:
{
  "symptoms": ["symptom1", "symptom2"],
  "medications": [{"name": "medication name", "timing": "when taken"}],
  "mental_state": "calm/anxious/stressed/happy/tired/etc",
  "lifestyle_notes": ["note1", "note2"],
  "severity": "low/medium/high",
  "doctor_summary": "A professional medical summary paragraph suitable for a doctor to review"
}

Be thorough but concise. Extract all relevant health information from the transcript."#;

/// Build the user message carrying one transcript
pub fn user_content(transcript: &str) -> String {
    format!("Analyze this health voice note and return structured JSON:\n\n\"{transcript}\"")
}
