//! Typed error definitions for SyncDeck.
//!
//! This module provides the structured error hierarchy for the association
//! engine. All errors are designed to be:
//!
//! - **Serializable** for IPC responses via serde
//! - **Displayable** for logging via Display trait
//! - **Matchable** for error handling logic via enum variants
//! - **Composable** via thiserror derive macros

mod engine;

pub use engine::EngineError;

/// Standard Result type using EngineError.
pub type Result<T> = std::result::Result<T, EngineError>;
