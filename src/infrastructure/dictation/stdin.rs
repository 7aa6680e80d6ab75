//! Stdin dictation adapter
//!
//! Stands in for a speech-to-text engine when journaling from a
//! terminal: each line typed is one dictation update, a blank line or
//! EOF ends the recording.

use async_trait::async_trait;
use std::io::IsTerminal;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use crate::application::ports::{DictationError, DictationEvent, DictationSource, DictationStream};

/// Line-based dictation source reading from standard input
pub struct StdinDictation {
    interactive_only: bool,
}

impl StdinDictation {
    /// Create a source that accepts both terminals and pipes
    pub fn new() -> Self {
        Self {
            interactive_only: false,
        }
    }

    /// Create a source that reports unsupported unless stdin is a
    /// terminal, mirroring a capability check in a restricted host
    pub fn interactive_only() -> Self {
        Self {
            interactive_only: true,
        }
    }
}

impl Default for StdinDictation {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DictationSource for StdinDictation {
    fn is_supported(&self) -> bool {
        !self.interactive_only || std::io::stdin().is_terminal()
    }

    async fn start(&self) -> Result<DictationStream, DictationError> {
        if !self.is_supported() {
            return Err(DictationError::Unsupported);
        }

        let (tx, rx) = mpsc::unbounded_channel();

        tokio::spawn(async move {
            let mut lines = BufReader::new(tokio::io::stdin()).lines();
            loop {
                match lines.next_line().await {
                    Ok(Some(line)) => {
                        if line.trim().is_empty() {
                            break;
                        }
                        if tx.send(DictationEvent::Speech(line)).is_err() {
                            return;
                        }
                    }
                    Ok(None) | Err(_) => break,
                }
            }
            let _ = tx.send(DictationEvent::Stopped);
        });

        Ok(rx)
    }

    async fn stop(&self) {
        // Nothing to tear down; the read task ends with its channel
    }
}
