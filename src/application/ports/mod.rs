//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod completion;
pub mod config;
pub mod dictation;
pub mod extractor;
pub mod sink;

// Re-export common types
pub use completion::{CompletionClient, CompletionError};
pub use config::ConfigStore;
pub use dictation::{DictationError, DictationEvent, DictationSource, DictationStream};
pub use extractor::{ExtractionError, Extractor};
pub use sink::RecordSink;
