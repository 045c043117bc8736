//! Suggested questions shown next to the chat

use serde::{Deserialize, Serialize};

/// Built-in questions offered when nothing is configured
pub const DEFAULT_SUGGESTIONS: [&str; 5] = [
    "¿De qué trató el video del mercado de solteros en China?",
    "¿Qué lugares visitó en Madagascar?",
    "¿Cuál fue su experiencia en Dubai?",
    "¿Qué opinó sobre Cuba?",
    "¿En qué video habla de comida mexicana?",
];

/// Ordered list of canned questions (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Suggestions(Vec<String>);

impl Suggestions {
    pub fn new(items: Vec<String>) -> Self {
        Self(
            items
                .into_iter()
                .filter(|s| !s.trim().is_empty())
                .collect(),
        )
    }

    /// Zero-based lookup
    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for Suggestions {
    fn default() -> Self {
        Self(DEFAULT_SUGGESTIONS.iter().map(|s| s.to_string()).collect())
    }
}
