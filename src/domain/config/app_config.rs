//! Application configuration value object

use serde::{Deserialize, Serialize};

/// Default AI gateway chat-completions endpoint
pub const DEFAULT_GATEWAY_URL: &str = "https://ai.gateway.lovable.dev/v1/chat/completions";

/// Default extraction model
pub const DEFAULT_MODEL: &str = "google/gemini-2.5-flash";

/// Default HTTP bind address for `serve`
pub const DEFAULT_BIND: &str = "127.0.0.1:8787";

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_key: Option<String>,
    pub gateway_url: Option<String>,
    pub model: Option<String>,
    pub bind: Option<String>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            api_key: None,
            gateway_url: Some(DEFAULT_GATEWAY_URL.to_string()),
            model: Some(DEFAULT_MODEL.to_string()),
            bind: Some(DEFAULT_BIND.to_string()),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            api_key: other.api_key.or(self.api_key),
            gateway_url: other.gateway_url.or(self.gateway_url),
            model: other.model.or(self.model),
            bind: other.bind.or(self.bind),
        }
    }

    /// Get the gateway URL, or the default if not set
    pub fn gateway_url_or_default(&self) -> &str {
        self.gateway_url.as_deref().unwrap_or(DEFAULT_GATEWAY_URL)
    }

    /// Get the model, or the default if not set
    pub fn model_or_default(&self) -> &str {
        self.model.as_deref().unwrap_or(DEFAULT_MODEL)
    }

    /// Get the bind address, or the default if not set
    pub fn bind_or_default(&self) -> &str {
        self.bind.as_deref().unwrap_or(DEFAULT_BIND)
    }
}
