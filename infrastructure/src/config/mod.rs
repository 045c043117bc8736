//! Configuration file loading for ragchat
//!
//! This module handles file I/O and merging of configuration from multiple
//! sources. The priority order (highest to lowest):
//!
//! 1. Environment: `RAGCHAT_API_URL`, `RAGCHAT_<SECTION>__<KEY>`
//! 2. `--config <path>` specified file
//! 3. Project root: `./ragchat.toml` or `./.ragchat.toml`
//! 4. Global: `$XDG_CONFIG_HOME/ragchat/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, DEFAULT_TIMEOUT_SECONDS, FileApiConfig, FileChatConfig, FileConfig,
    FileLoggingConfig, FileOutputConfig, FileReplConfig,
};
pub use loader::{API_URL_ENV, ConfigLoader, ENV_PREFIX};
