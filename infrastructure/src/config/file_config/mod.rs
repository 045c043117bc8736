//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod api;
mod chat;
mod logging;
mod output;
mod repl;

pub use api::{DEFAULT_TIMEOUT_SECONDS, FileApiConfig};
pub use chat::FileChatConfig;
pub use logging::FileLoggingConfig;
pub use output::FileOutputConfig;
pub use repl::FileReplConfig;

use ragchat_application::ChatParams;
use ragchat_domain::Suggestions;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("api.base_url cannot be empty")]
    EmptyBaseUrl,

    #[error("api.base_url must start with http:// or https:// (got '{0}')")]
    InvalidBaseUrl(String),

    #[error("api.timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("chat.failure_message cannot be empty")]
    EmptyFailureMessage,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Backend location and protocol
    pub api: FileApiConfig,
    /// User-facing chat texts
    pub chat: FileChatConfig,
    /// REPL settings
    pub repl: FileReplConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Conversation log settings
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut issues = Vec::new();

        let base_url = self.api.base_url.trim();
        if base_url.is_empty() {
            issues.push(ConfigValidationError::EmptyBaseUrl);
        } else if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            issues.push(ConfigValidationError::InvalidBaseUrl(base_url.to_string()));
        }

        if self.api.timeout_seconds == 0 {
            issues.push(ConfigValidationError::InvalidTimeout);
        }

        if let Some(message) = &self.chat.failure_message
            && message.trim().is_empty()
        {
            issues.push(ConfigValidationError::EmptyFailureMessage);
        }

        issues
    }

    /// Convert into controller parameters, filling gaps from the dialect
    pub fn to_chat_params(&self) -> ChatParams {
        let mut params = ChatParams::for_dialect(self.api.dialect)
            .with_history(self.api.send_history)
            .with_timeout(Some(Duration::from_secs(self.api.timeout_seconds)));

        if let Some(id) = &self.api.conversation_id {
            params = params.with_conversation_id(id.clone());
        }
        if let Some(message) = &self.chat.failure_message {
            params = params.with_failure_message(message.clone());
        }
        if let Some(suggestions) = &self.chat.suggestions {
            params = params.with_suggestions(Suggestions::new(suggestions.clone()));
        }

        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ragchat_domain::ApiDialect;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[api]
base_url = "http://rag.internal:9000"
dialect = "legacy"
timeout_seconds = 45
conversation_id = "kiosk-1"
send_history = true

[chat]
failure_message = "Algo salió mal."
suggestions = ["¿Qué opinó sobre Cuba?", "¿Qué comió en Japón?"]

[repl]
show_progress = false
history_file = "~/.local/share/ragchat/history.txt"

[output]
color = false

[logging]
conversation_log = "/tmp/ragchat.jsonl"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.api.base_url, "http://rag.internal:9000");
        assert_eq!(config.api.dialect, ApiDialect::Legacy);
        assert_eq!(config.api.timeout_seconds, 45);
        assert_eq!(config.api.conversation_id.as_deref(), Some("kiosk-1"));
        assert!(config.api.send_history);
        assert_eq!(config.chat.suggestions.as_ref().unwrap().len(), 2);
        assert!(!config.repl.show_progress);
        assert!(!config.output.color);
        assert_eq!(
            config.logging.conversation_log.as_deref(),
            Some("/tmp/ragchat.jsonl")
        );
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[api]
dialect = "legacy"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.api.dialect, ApiDialect::Legacy);
        // Defaults should apply
        assert_eq!(config.api.base_url, "http://localhost:8000");
        assert_eq!(config.api.timeout_seconds, DEFAULT_TIMEOUT_SECONDS);
        assert!(config.output.color);
        assert!(config.repl.show_progress);
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(FileConfig::default().validate().is_empty());
    }

    #[test]
    fn test_validate_collects_all_issues() {
        let mut config = FileConfig::default();
        config.api.base_url = "localhost:8000".to_string();
        config.api.timeout_seconds = 0;
        config.chat.failure_message = Some("  ".to_string());

        assert_eq!(
            config.validate(),
            vec![
                ConfigValidationError::InvalidBaseUrl("localhost:8000".to_string()),
                ConfigValidationError::InvalidTimeout,
                ConfigValidationError::EmptyFailureMessage,
            ]
        );
    }

    #[test]
    fn test_validate_empty_base_url() {
        let mut config = FileConfig::default();
        config.api.base_url = " ".to_string();
        assert_eq!(config.validate(), vec![ConfigValidationError::EmptyBaseUrl]);
    }

    #[test]
    fn test_chat_params_from_defaults() {
        let params = FileConfig::default().to_chat_params();
        assert_eq!(params.dialect, ApiDialect::Rag);
        assert_eq!(params.request_timeout, Some(Duration::from_secs(30)));
        assert_eq!(
            params.failure_message,
            ApiDialect::Rag.default_failure_message()
        );
        assert_eq!(params.suggestions, Suggestions::default());
    }

    #[test]
    fn test_chat_params_overrides() {
        let mut config = FileConfig::default();
        config.api.dialect = ApiDialect::Legacy;
        config.api.send_history = true;
        config.chat.failure_message = Some("Error".to_string());
        config.chat.suggestions = Some(vec!["uno".to_string()]);

        let params = config.to_chat_params();
        assert_eq!(params.conversation_id.as_deref(), Some("default"));
        assert!(params.send_history);
        assert_eq!(params.failure_message, "Error");
        assert_eq!(params.suggestions.iter().collect::<Vec<_>>(), vec!["uno"]);
    }
}
