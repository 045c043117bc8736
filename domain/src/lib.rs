//! Domain layer for ragchat
//!
//! This crate contains the conversation model and the wire contract of the
//! remote RAG backend. It has no dependencies on I/O, runtimes or terminals.
//!
//! # Core Concepts
//!
//! ## Session
//!
//! A [`Session`] is the client-side state of one chat interface: an ordered
//! transcript, a single-flight `pending` flag and the uncommitted draft.
//! Accepting a submission and resolving it are separate steps so the
//! network call can happen in between.
//!
//! ## Dialect
//!
//! The backend exists in two flavours ([`ApiDialect`]) that share one
//! request/response shape but differ in routes and user-facing texts.

pub mod backend;
pub mod conversation;
pub mod core;
pub mod util;

// Re-export commonly used types
pub use backend::{
    dialect::ApiDialect,
    exchange::{ChatReply, ChatRequest, HistoryEntry},
    stats::{CorpusSize, CorpusStats, DEFAULT_VIDEO_COUNT, HealthReport},
};
pub use conversation::{
    message::{Message, Role},
    session::{Resolution, Session, SessionState, Submission},
    source::Source,
    suggestions::{DEFAULT_SUGGESTIONS, Suggestions},
};
pub use core::{error::SubmitRejection, utterance::Utterance};
