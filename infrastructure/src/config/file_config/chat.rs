//! Chat texts from TOML (`[chat]` section)

use serde::{Deserialize, Serialize};

/// Raw chat configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileChatConfig {
    /// Notice shown when a request fails (dialect default when unset)
    pub failure_message: Option<String>,
    /// Canned questions (built-in list when unset)
    pub suggestions: Option<Vec<String>>,
}
