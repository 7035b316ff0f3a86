//! Types for the `OpenAI` chat-completions API.

use serde::{Deserialize, Serialize};

/// A message in a chat-completions conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// The role of the message sender ("system", "user" or "assistant").
    pub role: String,
    /// The content of the message.
    pub content: String,
}

impl Message {
    /// Build a user message.
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Request body for the chat-completions endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    /// Model to use (e.g., "gpt-4o-mini").
    pub model: String,
    /// Conversation messages.
    pub messages: Vec<Message>,
    /// Sampling temperature. The translation call pins this to 0.
    pub temperature: f32,
}

/// Response from the chat-completions endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    /// Unique response ID.
    pub id: String,
    /// Model that generated the response.
    pub model: String,
    /// Completion choices; the pipeline only reads the first.
    pub choices: Vec<Choice>,
    /// Token usage information.
    pub usage: Option<Usage>,
}

/// One completion choice.
#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    /// The generated message.
    pub message: ResponseMessage,
    /// Reason generation stopped (e.g., "stop", "length").
    pub finish_reason: Option<String>,
}

/// The assistant message inside a choice.
#[derive(Debug, Clone, Deserialize)]
pub struct ResponseMessage {
    /// Role, always "assistant" for completions.
    pub role: String,
    /// Generated text; absent for refusals or tool calls.
    pub content: Option<String>,
}

/// Token usage counters.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}
