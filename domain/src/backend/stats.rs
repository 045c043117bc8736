//! Corpus statistics and backend health

use serde::{Deserialize, Serialize};

/// Video count shown when the backend cannot report one
pub const DEFAULT_VIDEO_COUNT: u64 = 48;

/// Body of the stats endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusStats {
    pub total_chunks: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Corpus size as displayed to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CorpusSize {
    pub count: u64,
    /// False when the count is the static fallback
    pub reported: bool,
}

impl CorpusSize {
    /// Use the reported count, falling back to the default on absence or zero
    pub fn from_stats(stats: Option<&CorpusStats>) -> Self {
        match stats {
            Some(stats) if stats.total_chunks > 0 => Self {
                count: stats.total_chunks,
                reported: true,
            },
            _ => Self::fallback(),
        }
    }

    pub fn fallback() -> Self {
        Self {
            count: DEFAULT_VIDEO_COUNT,
            reported: false,
        }
    }
}

/// Body of the health endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthReport {
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vector_store_ready: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl HealthReport {
    /// The backend is up and its vector store (if reported) is loaded
    pub fn is_healthy(&self) -> bool {
        let status_ok = matches!(
            self.status.to_lowercase().as_str(),
            "healthy" | "running" | "operational" | "ok"
        );
        status_ok && self.error.is_none() && self.vector_store_ready != Some(false)
    }
}
