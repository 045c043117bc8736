//! Application layer for ragchat
//!
//! This crate contains the chat controller, port definitions, and
//! application configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{ChatParams, DEFAULT_REQUEST_TIMEOUT};
pub use ports::{
    chat_backend::{BackendError, ChatBackend},
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
};
pub use use_cases::chat_controller::{ChatController, SubmitOutcome};
