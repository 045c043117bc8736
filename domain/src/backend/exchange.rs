//! Wire contract of the chat endpoint.
//!
//! [`ChatRequest`] is the JSON body POSTed to the backend and [`ChatReply`]
//! is the answer it sends back. Unknown reply fields are ignored.

use crate::conversation::message::{Message, Role};
use crate::conversation::source::Source;
use serde::{Deserialize, Deserializer, Serialize};

/// Prior turn forwarded as conversational context
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub role: Role,
    pub content: String,
}

impl From<&Message> for HistoryEntry {
    fn from(message: &Message) -> Self {
        Self {
            role: message.role(),
            content: message.content().to_string(),
        }
    }
}

/// Request body for the chat endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversation_id: Option<String>,
}

impl ChatRequest {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            history: Vec::new(),
            conversation_id: None,
        }
    }

    pub fn with_history(mut self, history: &[Message]) -> Self {
        self.history = history.iter().map(HistoryEntry::from).collect();
        self
    }

    pub fn with_conversation_id(mut self, id: Option<impl Into<String>>) -> Self {
        self.conversation_id = id.map(Into::into);
        self
    }
}

/// Successful answer from the chat endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    /// Answer text
    pub response: String,
    /// Citations; a missing or `null` field reads as empty
    #[serde(default, deserialize_with = "null_as_empty")]
    pub sources: Vec<Source>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_chunks_used: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversation_id: Option<String>,
}

impl ChatReply {
    pub fn new(response: impl Into<String>, sources: Vec<Source>) -> Self {
        Self {
            response: response.into(),
            sources,
            total_chunks_used: None,
            conversation_id: None,
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Source>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Source>>::deserialize(deserializer)?.unwrap_or_default())
}
