//! Configuration for the assistant transport

use std::time::Duration;

use crate::error::{AssistantError, Result};

/// Environment variable holding the Gemini API key
pub const API_KEY_ENV_VAR: &str = "GEMINI_API_KEY";

/// Default generative model
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Default API endpoint
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Assistant transport configuration
#[derive(Debug, Clone)]
pub struct AssistantConfig {
    /// API key; `None` until configured
    api_key: Option<String>,
    /// Base URL of the generative language API
    pub base_url: String,
    /// Model identifier
    pub model: String,
    /// Request timeout
    pub timeout: Duration,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl AssistantConfig {
    /// Create a configuration with no API key
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration taking the API key from `GEMINI_API_KEY`
    pub fn from_env() -> Self {
        Self {
            api_key: std::env::var(API_KEY_ENV_VAR).ok(),
            ..Self::default()
        }
    }

    /// Set the API key
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the model identifier
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the base URL (useful for test servers)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Whether an API key is present
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// The API key, or the error the transport reports without one
    pub(crate) fn api_key(&self) -> Result<&str> {
        self.api_key
            .as_deref()
            .ok_or(AssistantError::MissingApiKey {
                env_var: API_KEY_ENV_VAR,
            })
    }
}

/// System prompt seeding every chat session.
///
/// The persona and wiring facts come from the original lab material; the
/// reference sketch is embedded so code questions can quote real lines.
pub fn system_prompt() -> String {
    format!(
        "Você é um especialista em Arduino e eletrônica embarcada, focado em \
         ajudar estudantes e makers.\n\n\
         Seu objetivo é explicar como funciona o sensor DHT11, como conectar \
         jumpers no Arduino Uno e Protoboard, e como funciona o código C++.\n\n\
         Mantenha suas respostas concisas, educativas e amigáveis. Use \
         formatação Markdown para código e ênfase.\n\
         Se o usuário perguntar sobre conexões, descreva claramente: VCC no \
         5V, GND no GND, Data no Pino Digital 2.\n\n\
         Código de referência do laboratório:\n```cpp\n{}\n```",
        dhtlab::firmware::SOURCE.trim_end()
    )
}
