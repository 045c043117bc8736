//! Backend API dialect value object

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Which flavour of the RAG backend API to speak
///
/// Both dialects take the same request body and return the same answer
/// shape; they differ in routes, the default conversation id and the
/// wording of the failure notice shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiDialect {
    /// `POST /chat`, `GET /stats` (default)
    #[default]
    Rag,
    /// `POST /api/chat`, `GET /api/stats`
    Legacy,
}

impl ApiDialect {
    pub fn chat_path(&self) -> &'static str {
        match self {
            ApiDialect::Rag => "/chat",
            ApiDialect::Legacy => "/api/chat",
        }
    }

    pub fn stats_path(&self) -> &'static str {
        match self {
            ApiDialect::Rag => "/stats",
            ApiDialect::Legacy => "/api/stats",
        }
    }

    pub fn health_path(&self) -> &'static str {
        "/health"
    }

    /// Conversation id sent when none is configured
    pub fn default_conversation_id(&self) -> Option<&'static str> {
        match self {
            ApiDialect::Rag => None,
            ApiDialect::Legacy => Some("default"),
        }
    }

    /// Fixed, localized text appended when a request fails
    pub fn default_failure_message(&self) -> &'static str {
        match self {
            ApiDialect::Rag => {
                "Lo siento, hubo un error al procesar tu mensaje. Por favor intenta de nuevo."
            }
            ApiDialect::Legacy => {
                "Lo siento, hubo un error al generar la respuesta. Por favor intenta de nuevo."
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ApiDialect::Rag => "rag",
            ApiDialect::Legacy => "legacy",
        }
    }
}

impl std::fmt::Display for ApiDialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApiDialect {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "rag" | "chat" => Ok(ApiDialect::Rag),
            "legacy" | "api" => Ok(ApiDialect::Legacy),
            other => Err(format!(
                "unknown API dialect '{}' (expected 'rag' or 'legacy')",
                other
            )),
        }
    }
}
