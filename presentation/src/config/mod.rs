//! Presentation-level configuration
//!
//! Configuration for output formatting and REPL behavior.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Output configuration for the presentation layer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

/// REPL configuration for the presentation layer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReplConfig {
    /// Show the thinking spinner and the welcome banner
    pub show_progress: bool,
    /// Path to history file
    pub history_file: Option<String>,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            show_progress: true,
            history_file: None,
        }
    }
}

impl ReplConfig {
    /// Where line-editor history lives, expanding a leading `~/`
    pub fn history_path(&self) -> Option<PathBuf> {
        match &self.history_file {
            Some(path) => match path.strip_prefix("~/") {
                Some(rest) => dirs::home_dir().map(|home| home.join(rest)),
                None => Some(PathBuf::from(path)),
            },
            None => dirs::data_dir().map(|p| p.join("ragchat").join("history.txt")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_path_explicit() {
        let config = ReplConfig {
            history_file: Some("/tmp/ragchat-history.txt".to_string()),
            ..Default::default()
        };
        assert_eq!(
            config.history_path(),
            Some(PathBuf::from("/tmp/ragchat-history.txt"))
        );
    }

    #[test]
    fn test_history_path_expands_home() {
        let config = ReplConfig {
            history_file: Some("~/.ragchat_history".to_string()),
            ..Default::default()
        };
        if let Some(home) = dirs::home_dir() {
            assert_eq!(config.history_path(), Some(home.join(".ragchat_history")));
        }
    }
}
