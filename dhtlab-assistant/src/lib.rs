//! # dhtlab Assistant - conversational learning layer
//!
//! Chat companion for the dhtlab virtual Arduino lab. Wraps a Gemini
//! `generateContent` transport behind a session that keeps the conversation
//! history and never surfaces a hard failure to the caller: transport and
//! service errors degrade to a localized fallback reply, and the session
//! stays usable afterwards.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use dhtlab_assistant::{AssistantConfig, ChatSession, GeminiClient};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let config = AssistantConfig::from_env();
//! let client = GeminiClient::new(config).expect("GEMINI_API_KEY not set");
//! let mut session = ChatSession::new(Box::new(client));
//!
//! // Always returns text; failures come back as a fallback reply.
//! let reply = session.send("Como ligo o DHT11 no Arduino?").await;
//! println!("{reply}");
//! # }
//! ```

// Modules
pub mod config;
pub mod error;
pub mod session;
pub mod transport;

// Re-exports for convenient access
pub use config::AssistantConfig;
pub use error::{AssistantError, Result};
pub use session::{ChatMessage, ChatSession, Sender, FALLBACK_EMPTY, FALLBACK_ERROR, WELCOME_MESSAGE};
pub use transport::{ChatTransport, GeminiClient};
