//! RAG backend adapter over HTTP/JSON.
//!
//! Implements the [`ChatBackend`](ragchat_application::ChatBackend) port
//! with `reqwest`. Route selection follows the configured
//! [`ApiDialect`](ragchat_domain::ApiDialect).

pub mod error;
pub mod http;

pub use error::HttpError;
pub use http::{DEFAULT_BASE_URL, HttpChatBackend};
