//! Model reply resolution
//!
//! The model is instructed to answer with bare JSON, but real replies
//! arrive as fenced markdown, prose around a fence, or no JSON at all.
//! Resolution never fails: anything unparseable becomes the
//! deterministic fallback record.

use crate::domain::record::HealthRecord;

/// Outcome of resolving a model reply into a health record.
///
/// Both variants are success from the caller's point of view; the tag
/// exists so observability can distinguish a clean parse from a
/// recovered one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    /// The reply parsed into the expected record shape
    Parsed(HealthRecord),
    /// The reply was not valid JSON; this is the fallback record
    Recovered(HealthRecord),
}

impl Extraction {
    /// Borrow the record regardless of how it was produced
    pub fn record(&self) -> &HealthRecord {
        match self {
            Self::Parsed(record) | Self::Recovered(record) => record,
        }
    }

    /// Take ownership of the record
    pub fn into_record(self) -> HealthRecord {
        match self {
            Self::Parsed(record) | Self::Recovered(record) => record,
        }
    }

    /// Whether the fallback path produced this record
    pub fn is_recovered(&self) -> bool {
        matches!(self, Self::Recovered(_))
    }
}

/// Resolve a raw model reply into a health record.
///
/// Candidate selection order: a ```json fenced block, then any fenced
/// block, then the whole reply. A candidate that fails to parse as the
/// record shape yields the fallback record with the raw reply as its
/// doctor summary. In every path `raw_transcript` is overwritten with
/// the submitted transcript last, so it can never be influenced by the
/// model.
pub fn resolve_reply(reply: &str, transcript: &str) -> Extraction {
    let candidate = fenced_block(reply, "```json")
        .or_else(|| fenced_block(reply, "```"))
        .unwrap_or(reply);

    match serde_json::from_str::<HealthRecord>(candidate.trim()) {
        Ok(mut record) => {
            record.normalize();
            record.raw_transcript = transcript.to_string();
            Extraction::Parsed(record)
        }
        Err(_) => {
            let mut record = HealthRecord::fallback(reply);
            record.raw_transcript = transcript.to_string();
            Extraction::Recovered(record)
        }
    }
}

/// Interior of the first fenced block opened by `fence`, if any
fn fenced_block<'a>(text: &'a str, fence: &str) -> Option<&'a str> {
    let start = text.find(fence)? + fence.len();
    let rest = &text[start..];
    let end = rest.find("```")?;
    Some(&rest[..end])
}
