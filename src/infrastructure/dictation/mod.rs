//! Dictation source adapters

mod stdin;

pub use stdin::StdinDictation;
