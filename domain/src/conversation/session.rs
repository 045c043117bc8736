//! Conversation session aggregate
//!
//! [`Session`] owns the transcript and the single-flight state. It is a pure
//! state machine: accepting a submission and resolving it are two separate
//! synchronous steps, and whatever happens between them (the network call)
//! lives outside the domain.
//!
//! ```text
//!            accept (ok)
//!   Idle ─────────────────▶ Awaiting
//!    ▲                         │
//!    └──── answer / fail ──────┘
//! ```
//!
//! `clear` is legal in both states and does not change the state. It bumps
//! the session epoch so that a reply to a submission accepted before the
//! clear is dropped instead of landing in the fresh transcript.

use super::message::{Message, Role};
use super::source::Source;
use crate::core::error::SubmitRejection;
use crate::core::utterance::Utterance;

/// Single-flight state of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No request in flight; submissions are accepted
    Idle,
    /// One request in flight; submissions are rejected
    Awaiting,
}

/// Outcome of resolving an accepted submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The assistant message was appended
    Applied,
    /// The transcript was cleared since acceptance; the reply was dropped
    Discarded,
}

/// Handle for an accepted submission.
///
/// Not `Clone`: resolving consumes it, so every accepted submission is
/// resolved at most once.
#[derive(Debug)]
pub struct Submission {
    epoch: u64,
    utterance: Utterance,
    history: Vec<Message>,
}

impl Submission {
    /// The accepted user text
    pub fn utterance(&self) -> &Utterance {
        &self.utterance
    }

    /// Transcript as it was before this submission's user message
    pub fn history(&self) -> &[Message] {
        &self.history
    }

    /// Session epoch this submission belongs to
    pub fn epoch(&self) -> u64 {
        self.epoch
    }
}

/// Client-side conversational state for one rendered interface
#[derive(Debug, Clone, Default)]
pub struct Session {
    transcript: Vec<Message>,
    pending: bool,
    draft: String,
    epoch: u64,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn transcript(&self) -> &[Message] {
        &self.transcript
    }

    pub fn len(&self) -> usize {
        self.transcript.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transcript.is_empty()
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn state(&self) -> SessionState {
        if self.pending {
            SessionState::Awaiting
        } else {
            SessionState::Idle
        }
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Accept a submission.
    ///
    /// On success the user message is already in the transcript, the draft
    /// is empty and the session is `Awaiting`. On rejection nothing changed.
    pub fn accept(&mut self, text: &str) -> Result<Submission, SubmitRejection> {
        let utterance = Utterance::parse(text).ok_or(SubmitRejection::EmptyInput)?;
        if self.pending {
            return Err(SubmitRejection::Busy);
        }

        let history = self.transcript.clone();
        self.transcript.push(Message::user(utterance.as_str()));
        self.draft.clear();
        self.pending = true;

        Ok(Submission {
            epoch: self.epoch,
            utterance,
            history,
        })
    }

    /// Resolve a submission with the backend's answer
    pub fn answer(
        &mut self,
        submission: Submission,
        content: impl Into<String>,
        sources: Vec<Source>,
    ) -> Resolution {
        self.resolve(submission, Message::answer(content, sources))
    }

    /// Resolve a submission with a user-facing failure notice
    pub fn fail(&mut self, submission: Submission, notice: impl Into<String>) -> Resolution {
        self.resolve(submission, Message::assistant(notice))
    }

    fn resolve(&mut self, submission: Submission, reply: Message) -> Resolution {
        debug_assert_eq!(reply.role(), Role::Assistant);
        self.pending = false;

        if submission.epoch != self.epoch {
            return Resolution::Discarded;
        }

        self.transcript.push(reply);
        Resolution::Applied
    }

    /// Empty the transcript. Does not touch the in-flight flag.
    pub fn clear(&mut self) {
        self.transcript.clear();
        self.epoch = self.epoch.wrapping_add(1);
    }
}
