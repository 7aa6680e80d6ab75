//! Chat-completions gateway client adapter

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::application::ports::{CompletionClient, CompletionError};
use crate::domain::config::{DEFAULT_GATEWAY_URL, DEFAULT_MODEL};

/// Caller-side timeout for one completion round-trip
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

// Request types for the chat-completions API

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

// Response types for the chat-completions API

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Option<Vec<Choice>>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Option<ReplyMessage>,
}

#[derive(Debug, Deserialize)]
struct ReplyMessage {
    content: Option<String>,
}

/// Chat-completions client for the AI gateway
pub struct AiGatewayClient {
    api_key: String,
    url: String,
    model: String,
    client: reqwest::Client,
}

impl AiGatewayClient {
    /// Create a client against the default gateway and model
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_endpoint(api_key, DEFAULT_GATEWAY_URL, DEFAULT_MODEL)
    }

    /// Create a client with a custom endpoint and model
    pub fn with_endpoint(
        api_key: impl Into<String>,
        url: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            url: url.into(),
            model: model.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Build the request body
    fn build_request(&self, system: &str, user: &str) -> ChatRequest {
        ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system.to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: user.to_string(),
                },
            ],
        }
    }

    /// Extract the reply text from a response.
    /// A present-but-empty reply is returned as is; downstream
    /// resolution turns it into the fallback record.
    fn extract_text(response: ChatResponse) -> Option<String> {
        response.choices?.into_iter().next()?.message?.content
    }
}

#[async_trait]
impl CompletionClient for AiGatewayClient {
    async fn complete(&self, system: &str, user: &str) -> Result<String, CompletionError> {
        let body = self.build_request(system, user);

        let response = self
            .client
            .post(&self.url)
            .timeout(REQUEST_TIMEOUT)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| CompletionError::RequestFailed(e.to_string()))?;

        let status = response.status();

        // Handle HTTP errors
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(CompletionError::RateLimited);
        }

        if status == reqwest::StatusCode::PAYMENT_REQUIRED {
            return Err(CompletionError::QuotaExceeded);
        }

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            error!(status = status.as_u16(), body = %body, "AI gateway error");
            return Err(CompletionError::Api {
                status: status.as_u16(),
                body,
            });
        }

        // Parse response
        let response: ChatResponse = response
            .json()
            .await
            .map_err(|e| CompletionError::ParseError(e.to_string()))?;

        Self::extract_text(response).ok_or(CompletionError::EmptyResponse)
    }
}
