//! Chat parameters: controller behaviour.
//!
//! [`ChatParams`] groups the static parameters that control how
//! [`ChatController`](crate::use_cases::chat_controller::ChatController)
//! builds requests and what it shows when they fail.

use ragchat_domain::{ApiDialect, Suggestions};
use std::time::Duration;

/// Default client-side bound on a single backend call
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Controller parameters.
///
/// Defaults follow the selected [`ApiDialect`]: conversation id and failure
/// notice both come from the dialect unless overridden.
#[derive(Debug, Clone)]
pub struct ChatParams {
    /// Backend flavour
    pub dialect: ApiDialect,
    /// Conversation id attached to every request
    pub conversation_id: Option<String>,
    /// Forward the prior transcript as `history`
    pub send_history: bool,
    /// Bound on one backend call; `None` waits forever
    pub request_timeout: Option<Duration>,
    /// Assistant text appended when a request fails
    pub failure_message: String,
    /// Canned questions
    pub suggestions: Suggestions,
}

impl Default for ChatParams {
    fn default() -> Self {
        Self::for_dialect(ApiDialect::default())
    }
}

impl ChatParams {
    pub fn for_dialect(dialect: ApiDialect) -> Self {
        Self {
            dialect,
            conversation_id: dialect.default_conversation_id().map(str::to_string),
            send_history: false,
            request_timeout: Some(DEFAULT_REQUEST_TIMEOUT),
            failure_message: dialect.default_failure_message().to_string(),
            suggestions: Suggestions::default(),
        }
    }

    // ==================== Builder Methods ====================

    pub fn with_conversation_id(mut self, id: impl Into<String>) -> Self {
        self.conversation_id = Some(id.into());
        self
    }

    pub fn with_history(mut self, send: bool) -> Self {
        self.send_history = send;
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_failure_message(mut self, message: impl Into<String>) -> Self {
        self.failure_message = message.into();
        self
    }

    pub fn with_suggestions(mut self, suggestions: Suggestions) -> Self {
        self.suggestions = suggestions;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_follow_rag_dialect() {
        let params = ChatParams::default();
        assert_eq!(params.dialect, ApiDialect::Rag);
        assert!(params.conversation_id.is_none());
        assert!(!params.send_history);
        assert_eq!(params.request_timeout, Some(Duration::from_secs(30)));
        assert_eq!(
            params.failure_message,
            ApiDialect::Rag.default_failure_message()
        );
        assert_eq!(params.suggestions.len(), 5);
    }

    #[test]
    fn test_legacy_dialect_sends_default_conversation() {
        let params = ChatParams::for_dialect(ApiDialect::Legacy);
        assert_eq!(params.conversation_id.as_deref(), Some("default"));
    }

    #[test]
    fn test_builders_override() {
        let params = ChatParams::default()
            .with_conversation_id("abc")
            .with_history(true)
            .with_timeout(None)
            .with_failure_message("error");
        assert_eq!(params.conversation_id.as_deref(), Some("abc"));
        assert!(params.send_history);
        assert!(params.request_timeout.is_none());
        assert_eq!(params.failure_message, "error");
    }
}
