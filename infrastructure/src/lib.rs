//! Infrastructure layer for ragchat
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod backend;
pub mod config;
pub mod logging;

// Re-export commonly used types
pub use backend::{DEFAULT_BASE_URL, HttpChatBackend, HttpError};
pub use config::{
    API_URL_ENV, ConfigLoader, ConfigValidationError, FileApiConfig, FileChatConfig, FileConfig,
    FileLoggingConfig, FileOutputConfig, FileReplConfig,
};
pub use logging::JsonlConversationLogger;
