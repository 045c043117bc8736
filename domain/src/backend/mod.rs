//! Contract with the remote RAG backend.
//!
//! - [`dialect::ApiDialect`]: which route set to use
//! - [`exchange::ChatRequest`] / [`exchange::ChatReply`]: chat endpoint bodies
//! - [`stats::CorpusStats`] / [`stats::HealthReport`]: auxiliary endpoints

pub mod dialect;
pub mod exchange;
pub mod stats;
