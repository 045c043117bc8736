//! Conversation domain.
//!
//! - [`session::Session`]: transcript plus single-flight state machine
//! - [`message::Message`]: a single user or assistant message
//! - [`source::Source`]: a citation attached to an answer
//! - [`suggestions::Suggestions`]: canned questions offered to the user

pub mod message;
pub mod session;
pub mod source;
pub mod suggestions;
