//! Use cases (application services)
//!
//! Use cases orchestrate domain logic and coordinate with external adapters
//! through ports.

pub mod chat_controller;
