//! Completion client: one POST to `/chat/completions`, first reply back.

pub mod context;
mod error;
mod wire;

use crate::core::app;
use crate::core::config::Config;
use crate::core::message::Message;

pub use error::ChatError;

use wire::{ChatCompletion, ChatRequest};

/// Something that turns an ordered message list into one assistant reply.
///
/// Implemented by [`OpenAiClient`]; command code is generic over it.
#[allow(async_fn_in_trait)]
pub trait Completion {
    async fn complete(&self, messages: &[Message]) -> Result<String, ChatError>;
}

/// Client for an OpenAI-compatible chat completions endpoint.
///
/// Single shot: no retries, no streaming, and no timeout beyond the transport default.
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
    model: String,
}

impl OpenAiClient {
    pub fn new(config: &Config) -> Result<Self, ChatError> {
        let http = reqwest::Client::builder()
            .user_agent(app::user_agent())
            .build()
            .map_err(ChatError::Network)?;
        Ok(Self {
            http,
            endpoint: format!("{}/chat/completions", config.base_url),
            api_key: config.api_key.clone(),
            model: config.model_id.clone(),
        })
    }

    /// Send `messages` as one request and return the first choice's text.
    pub async fn send(&self, messages: &[Message]) -> Result<String, ChatError> {
        log::debug!(
            "POST {} ({} messages, model {})",
            self.endpoint,
            messages.len(),
            self.model
        );
        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&ChatRequest {
                model: &self.model,
                messages,
            })
            .send()
            .await
            .map_err(ChatError::Network)?;

        let status = response.status();
        let body = response.text().await.map_err(ChatError::Network)?;
        if !status.is_success() {
            log::debug!("completion request failed with {}", status);
            return Err(ChatError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let completion: ChatCompletion =
            serde_json::from_str(&body).map_err(ChatError::InvalidResponse)?;
        completion.into_first_reply()
    }
}

impl Completion for OpenAiClient {
    async fn complete(&self, messages: &[Message]) -> Result<String, ChatError> {
        self.send(messages).await
    }
}
