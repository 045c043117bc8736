//! Chat backend port
//!
//! Defines the interface for talking to the remote RAG backend.

use async_trait::async_trait;
use ragchat_domain::{ChatReply, ChatRequest, CorpusStats, HealthReport};
use thiserror::Error;

/// Errors that can occur while talking to the backend
///
/// The controller maps every variant to the same user-facing notice; the
/// distinction only matters for diagnostics.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BackendError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Timeout")]
    Timeout,

    #[error("HTTP status {code}: {body}")]
    Status { code: u16, body: String },

    #[error("Malformed response: {0}")]
    Decode(String),

    #[error("Other error: {0}")]
    Other(String),
}

impl BackendError {
    /// Short machine-readable category, used in structured logs
    pub fn kind(&self) -> &'static str {
        match self {
            BackendError::Connection(_) => "connection",
            BackendError::Timeout => "timeout",
            BackendError::Status { .. } => "status",
            BackendError::Decode(_) => "decode",
            BackendError::Other(_) => "other",
        }
    }
}

/// Gateway to the RAG backend
///
/// This port defines how the application layer reaches the backend.
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// Ask a question and get an answer with citations
    async fn send_chat(&self, request: &ChatRequest) -> Result<ChatReply, BackendError>;

    /// Fetch corpus statistics (display only)
    async fn corpus_stats(&self) -> Result<CorpusStats, BackendError>;

    /// Probe backend health
    async fn health(&self) -> Result<HealthReport, BackendError>;

    /// Human-readable location of the backend, for banners and logs
    fn location(&self) -> String;
}
