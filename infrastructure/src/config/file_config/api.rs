//! Backend API configuration from TOML (`[api]` section)
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:8000"
//! dialect = "rag"            # or "legacy"
//! timeout_seconds = 30
//! conversation_id = "default"
//! send_history = false
//! ```

use crate::backend::DEFAULT_BASE_URL;
use ragchat_domain::ApiDialect;
use serde::{Deserialize, Serialize};

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Raw backend API configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileApiConfig {
    /// Base URL of the RAG backend
    pub base_url: String,
    /// Route set to use
    pub dialect: ApiDialect,
    /// Client-side bound on one request
    pub timeout_seconds: u64,
    /// Conversation id attached to requests (dialect default when unset)
    pub conversation_id: Option<String>,
    /// Forward the prior transcript as `history`
    pub send_history: bool,
}

impl Default for FileApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            dialect: ApiDialect::default(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            conversation_id: None,
            send_history: false,
        }
    }
}
