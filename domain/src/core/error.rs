//! Domain error types

use thiserror::Error;

/// Reasons a submission is dropped without touching the transcript
///
/// None of these are faults: the caller is expected to ignore them
/// (the view normally disables the input while busy anyway).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitRejection {
    #[error("Message is empty")]
    EmptyInput,

    #[error("A request is already in flight")]
    Busy,

    #[error("No suggestion at position {0}")]
    UnknownSuggestion(usize),
}

impl SubmitRejection {
    /// Check if this rejection is the single-flight guard
    pub fn is_busy(&self) -> bool {
        matches!(self, SubmitRejection::Busy)
    }
}
