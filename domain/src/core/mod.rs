//! Core domain concepts shared across all subdomains.
//!
//! - [`utterance::Utterance`]: validated user input
//! - [`error::SubmitRejection`]: why a submission was dropped

pub mod error;
pub mod utterance;
