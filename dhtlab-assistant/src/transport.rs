//! Chat transport: the trait seam and the Gemini implementation
//!
//! The session talks to a [`ChatTransport`] so tests can swap in a scripted
//! in-memory transport; [`GeminiClient`] is the production implementation
//! over the REST `models/{model}:generateContent` endpoint.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{system_prompt, AssistantConfig};
use crate::error::{AssistantError, Result};
use crate::session::ChatMessage;

/// Trait for chat transports
#[async_trait]
pub trait ChatTransport: Send + Sync {
    /// Produce the next reply given the conversation so far.
    ///
    /// `history` is ordered oldest first and ends with the pending user
    /// message. Implementations return the raw reply text; mapping failures
    /// to user-visible fallbacks is the session's job, not the transport's.
    async fn generate(&self, history: &[ChatMessage]) -> Result<String>;
}

// Wire format of the generateContent endpoint.

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    system_instruction: SystemInstruction,
    contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
struct SystemInstruction {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

/// Gemini `generateContent` client
pub struct GeminiClient {
    http: Client,
    config: AssistantConfig,
    system_prompt: String,
}

impl GeminiClient {
    /// Create a client from a configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if no API key is configured or the HTTP client
    /// cannot be built.
    pub fn new(config: AssistantConfig) -> Result<Self> {
        config.api_key()?;
        let http = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            http,
            config,
            system_prompt: system_prompt(),
        })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.base_url, self.config.model
        )
    }

    fn build_request(&self, history: &[ChatMessage]) -> GenerateContentRequest {
        let contents = history
            .iter()
            .map(|message| Content {
                role: Some(message.sender().api_role().to_string()),
                parts: vec![Part {
                    text: message.text().to_string(),
                }],
            })
            .collect();

        GenerateContentRequest {
            system_instruction: SystemInstruction {
                parts: vec![Part {
                    text: self.system_prompt.clone(),
                }],
            },
            contents,
        }
    }
}

#[async_trait]
impl ChatTransport for GeminiClient {
    async fn generate(&self, history: &[ChatMessage]) -> Result<String> {
        let request = self.build_request(history);
        debug!(model = %self.config.model, turns = history.len(), "sending chat request");

        let response = self
            .http
            .post(self.endpoint())
            // Key goes in a header, not the URL, so it never lands in logs.
            .header("x-goog-api-key", self.config.api_key()?)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AssistantError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|err| AssistantError::MalformedResponse(err.to_string()))?;

        let text: String = body
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .map(|part| part.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(AssistantError::EmptyResponse);
        }
        Ok(text)
    }
}
