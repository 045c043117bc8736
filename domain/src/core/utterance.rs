//! Utterance value object

use serde::{Deserialize, Serialize};

/// A user-authored message that passed validation (Value Object)
///
/// Always trimmed and never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Utterance {
    text: String,
}

impl Utterance {
    /// Trim the input, returning None if nothing is left
    pub fn parse(text: &str) -> Option<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self {
                text: trimmed.to_string(),
            })
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

impl std::fmt::Display for Utterance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

impl TryFrom<String> for Utterance {
    type Error = &'static str;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Utterance::parse(&value).ok_or("utterance cannot be empty")
    }
}

impl From<Utterance> for String {
    fn from(value: Utterance) -> Self {
        value.text
    }
}
