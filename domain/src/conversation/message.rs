//! Conversation message entity

use super::source::Source;
use serde::{Deserialize, Serialize};

/// Author of a message in the transcript
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A message in the transcript (Entity)
///
/// Immutable once created. A message without citations carries an empty
/// `sources` list; "no sources" and "empty sources" are the same state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    role: Role,
    content: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    sources: Vec<Source>,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
            sources: Vec::new(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
            sources: Vec::new(),
        }
    }

    /// An assistant answer citing the given sources
    pub fn answer(content: impl Into<String>, sources: Vec<Source>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
            sources,
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn sources(&self) -> &[Source] {
        &self.sources
    }

    pub fn is_user(&self) -> bool {
        self.role == Role::User
    }

    pub fn has_sources(&self) -> bool {
        !self.sources.is_empty()
    }

    /// Content split into display lines
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.content.split('\n')
    }
}
