//! CLI command definitions

use clap::{Parser, ValueEnum};
use ragchat_domain::ApiDialect;
use std::path::PathBuf;

/// Output format for one-shot answers
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Formatted text with citations
    Text,
    /// The assistant message as JSON
    Json,
}

/// Backend API dialect
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DialectArg {
    /// POST /chat with history
    Rag,
    /// POST /api/chat with conversation_id
    Legacy,
}

impl From<DialectArg> for ApiDialect {
    fn from(arg: DialectArg) -> Self {
        match arg {
            DialectArg::Rag => ApiDialect::Rag,
            DialectArg::Legacy => ApiDialect::Legacy,
        }
    }
}

/// CLI arguments for ragchat
#[derive(Parser, Debug)]
#[command(name = "ragchat")]
#[command(author, version, about = "Chat with a video-transcript RAG backend")]
#[command(long_about = r#"
ragchat forwards your questions to a retrieval-augmented-generation backend
and prints the answers together with the videos they were drawn from.

Without a question it starts an interactive chat.

Configuration is loaded from (in priority order):
1. RAGCHAT_API_URL / RAGCHAT_<SECTION>__<KEY> environment variables
2. --config <path>       Explicit config file
3. ./ragchat.toml        Project-level config
4. ~/.config/ragchat/config.toml   Global config

Example:
  ragchat "¿Qué opinó sobre Cuba?"
  ragchat --api-url http://10.0.0.5:8000 --dialect legacy
  ragchat --stats
"#)]
pub struct Cli {
    /// Question to ask (starts the interactive chat when omitted)
    pub question: Option<String>,

    /// Base URL of the backend (overrides config and environment)
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// Backend API dialect
    #[arg(long, value_enum)]
    pub dialect: Option<DialectArg>,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECONDS")]
    pub timeout: Option<u64>,

    /// Forward the conversation so far as history
    #[arg(long)]
    pub history: bool,

    /// Show corpus statistics and exit
    #[arg(long)]
    pub stats: bool,

    /// Check backend health and exit
    #[arg(long)]
    pub health: bool,

    /// Output format for one-shot answers
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: OutputFormat,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the spinner and banner
    #[arg(short, long)]
    pub quiet: bool,

    /// Write diagnostic logs to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
