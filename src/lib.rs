//! docvet
//!
//! A live constraint-validation console for structured documents.
//!
//! This library provides:
//! - Engine result decoding and entity-path resolution
//! - A framed stdio client for the external validation engine
//! - Change-driven validation orchestration and rendering
//! - Configuration management

pub mod config;
pub mod console;
pub mod engine;
pub mod report;

// Re-exports for clean public API
pub use config::Config;
pub use console::{Orchestrator, Presenter, SourceKind};
pub use engine::{Engine, EngineError, ProcessEngine};
pub use report::{EntityRef, ValidationOutcome, Violation, resolve_path};
