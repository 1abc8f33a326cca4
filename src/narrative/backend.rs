//! Optional generative-text backend for the narrative section.
//!
//! Anything implementing [`NarrativeBackend`] can stand in for the
//! deterministic generator; failures are handled by the caller.

use crate::types::config::NarrativeConfig;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

pub const SYSTEM_PROMPT: &str = "You are an expert software engineer and recruiter evaluating \
GitHub repositories. Provide honest, professional, and actionable feedback. Be specific and \
avoid generic responses.";

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("credential not set: {0}")]
    MissingCredential(String),

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("backend returned status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("backend returned no content")]
    EmptyResponse,

    #[error("no JSON object found in backend response")]
    MissingPayload,

    #[error("malformed report payload: {0}")]
    Payload(String),
}

pub trait NarrativeBackend {
    fn name(&self) -> &str;

    /// Sends one prompt and returns the raw completion text.
    fn complete(&self, prompt: &str) -> Result<String, BackendError>;
}

/// OpenAI-compatible chat-completions client.
pub struct ChatBackend {
    client: reqwest::blocking::Client,
    endpoint: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatReply,
}

#[derive(Debug, Deserialize)]
struct ChatReply {
    #[serde(default)]
    content: Option<String>,
}

impl ChatBackend {
    pub fn new(config: &NarrativeConfig, api_key: &str) -> Result<Self, BackendError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", api_key))
                .map_err(|_| BackendError::MissingCredential("invalid API key format".into()))?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = reqwest::blocking::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        })
    }

    /// Reads the credential from the variable named in config.
    pub fn from_config(config: &NarrativeConfig) -> Result<Self, BackendError> {
        let api_key = std::env::var(&config.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| BackendError::MissingCredential(config.api_key_env.clone()))?;
        Self::new(config, &api_key)
    }
}

impl NarrativeBackend for ChatBackend {
    fn name(&self) -> &str {
        &self.model
    }

    fn complete(&self, prompt: &str) -> Result<String, BackendError> {
        let request = ChatRequest {
            model: &self.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        };

        let response = self.client.post(&self.endpoint).json(&request).send()?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().unwrap_or_default();
            return Err(BackendError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let body: ChatResponse = response.json()?;
        body.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or(BackendError::EmptyResponse)
    }
}
