//! Transcript-to-record extraction domain logic

pub mod prompt;
mod resolve;

pub use resolve::{resolve_reply, Extraction};
