//! Application configuration
//!
//! Runtime parameters consumed by the use cases. File parsing lives in the
//! infrastructure layer, which converts its raw TOML types into these.

mod chat_params;

pub use chat_params::{ChatParams, DEFAULT_REQUEST_TIMEOUT};
