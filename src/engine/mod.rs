//! Validation Engine Boundary
//!
//! The engine that compiles constraint sets and checks documents against
//! them is an external process. This module defines the capability the rest
//! of the console programs against, and the client that reaches a real
//! engine over its stdio.

pub mod process;

use async_trait::async_trait;
use thiserror::Error;

pub use process::ProcessEngine;

/// Failure of an engine call.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The engine answered with a failure message. Displayed verbatim.
    #[error("{0}")]
    Rejected(String),
    /// The byte stream to the engine broke down.
    #[error("engine transport failure: {0}")]
    Transport(#[from] std::io::Error),
    /// The engine sent something the wire protocol does not allow.
    #[error("engine protocol violation: {0}")]
    Protocol(String),
}

/// The two operations the console needs from a validation engine.
///
/// Everything crosses this boundary as raw bytes; constraint loading
/// replaces the engine's schema state wholesale.
#[async_trait]
pub trait Engine: Send + Sync {
    async fn load_constraints(&self, sets: Vec<Vec<u8>>) -> Result<(), EngineError>;

    async fn validate_document(&self, document: Vec<u8>) -> Result<Vec<u8>, EngineError>;
}
