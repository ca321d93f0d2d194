//! Chat session state and the fallback-on-failure policy

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Local};
use tracing::warn;

use crate::error::AssistantError;
use crate::transport::ChatTransport;

/// Greeting the session opens with
pub const WELCOME_MESSAGE: &str = "Olá! Eu sou seu assistente virtual de eletrônica. \
    Posso ajudar com dúvidas sobre o código, conexões do circuito ou como o sensor \
    DHT11 funciona. O que você gostaria de saber?";

/// Reply shown when the model answers with no usable text
pub const FALLBACK_EMPTY: &str = "Desculpe, não consegui processar sua resposta.";

/// Reply shown when the transport or the service fails
pub const FALLBACK_ERROR: &str =
    "Erro ao conectar com o assistente IA. Verifique sua chave de API.";

static NEXT_MESSAGE_ID: AtomicU64 = AtomicU64::new(1);

/// Who authored a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    /// The student
    User,
    /// The assistant
    Bot,
    /// Session-level notices
    System,
}

impl Sender {
    /// Role name on the generateContent wire
    pub fn api_role(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Bot | Self::System => "model",
        }
    }
}

/// One immutable chat message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    id: u64,
    sender: Sender,
    text: String,
    timestamp: DateTime<Local>,
}

impl ChatMessage {
    /// Create a message stamped with the current wall-clock time
    pub fn new(sender: Sender, text: impl Into<String>) -> Self {
        Self {
            id: NEXT_MESSAGE_ID.fetch_add(1, Ordering::Relaxed),
            sender,
            text: text.into(),
            timestamp: Local::now(),
        }
    }

    /// Opaque unique identifier
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Message author
    pub fn sender(&self) -> Sender {
        self.sender
    }

    /// Message text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// When the message was created
    pub fn timestamp(&self) -> DateTime<Local> {
        self.timestamp
    }
}

/// A chat conversation with the assistant.
///
/// Keeps the full history (welcome message included) and forwards it to the
/// transport on every turn. `send` never fails: transport errors degrade to
/// [`FALLBACK_ERROR`], empty model output to [`FALLBACK_EMPTY`], and the
/// session remains usable afterwards.
pub struct ChatSession {
    transport: Box<dyn ChatTransport>,
    history: Vec<ChatMessage>,
}

impl ChatSession {
    /// Create a session seeded with the welcome message
    pub fn new(transport: Box<dyn ChatTransport>) -> Self {
        Self {
            transport,
            history: vec![ChatMessage::new(Sender::Bot, WELCOME_MESSAGE)],
        }
    }

    /// Send a user message and return the assistant's reply text.
    ///
    /// Both sides of the turn are recorded in the history, fallback replies
    /// included.
    pub async fn send(&mut self, text: impl Into<String>) -> String {
        self.history.push(ChatMessage::new(Sender::User, text));

        let reply = match self.transport.generate(&self.history).await {
            Ok(reply) => reply,
            Err(AssistantError::EmptyResponse) => FALLBACK_EMPTY.to_string(),
            Err(err) => {
                warn!(error = %err, "assistant transport failed");
                FALLBACK_ERROR.to_string()
            }
        };

        self.history.push(ChatMessage::new(Sender::Bot, reply.clone()));
        reply
    }

    /// The conversation so far, oldest message first
    pub fn history(&self) -> &[ChatMessage] {
        &self.history
    }
}
