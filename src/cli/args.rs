//! CLI argument definitions using Clap

use clap::{Parser, Subcommand};

/// VitalVoice - voice health journaling
#[derive(Parser, Debug)]
#[command(name = "vitalvoice")]
#[command(version)]
#[command(about = "Voice health journaling: turns speech transcripts into structured medical records")]
#[command(long_about = None)]
pub struct Cli {
    /// Subcommand (defaults to `journal`)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the extraction HTTP service
    Serve {
        /// Address to bind (e.g. 127.0.0.1:8787)
        #[arg(short, long, value_name = "ADDR")]
        bind: Option<String>,
    },
    /// Record one journal entry: type dictation lines, finish with a
    /// blank line, get the structured record
    Journal,
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &["api_key", "gateway_url", "model", "bind"];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}
