//! Validation Orchestrator
//!
//! Decides, per change notification, whether the engine needs a constraint
//! reload followed by a validation pass or a validation pass alone, and
//! converts every failure into display state. Nothing escapes: a failed
//! engine call, an unreadable source, and a malformed payload all end up
//! as rendered text, never a crash.

use std::io::Write;
use std::sync::Arc;

use crate::console::presenter::Presenter;
use crate::console::sources::{SourceKind, TextSource};
use crate::engine::Engine;
use crate::report;

pub struct Orchestrator<W: Write> {
    engine: Arc<dyn Engine>,
    document: Box<dyn TextSource>,
    core_constraints: Box<dyn TextSource>,
    type_tag_constraints: Box<dyn TextSource>,
    presenter: Presenter<W>,
}

impl<W: Write> Orchestrator<W> {
    pub fn new(
        engine: Arc<dyn Engine>,
        document: Box<dyn TextSource>,
        core_constraints: Box<dyn TextSource>,
        type_tag_constraints: Box<dyn TextSource>,
        presenter: Presenter<W>,
    ) -> Self {
        Self {
            engine,
            document,
            core_constraints,
            type_tag_constraints,
            presenter,
        }
    }

    /// React to one source change.
    pub async fn handle_change(&mut self, kind: SourceKind) {
        log::debug!("source changed: {kind:?}");

        match kind {
            SourceKind::Document => self.validate_document().await,
            SourceKind::CoreConstraints | SourceKind::TypeTagConstraints => {
                self.reload_constraints().await
            }
        }
    }

    /// Validate the current document against the engine's loaded
    /// constraints and render the outcome.
    pub async fn validate_document(&mut self) {
        let text = match self.document.current_value() {
            Ok(text) => text,
            Err(err) => return self.presenter.show_error(&err.to_string()),
        };

        match self.engine.validate_document(report::encode(text)).await {
            Ok(raw) => match report::decode_outcome(&raw) {
                Ok(outcome) => self.presenter.show_outcome(&outcome),
                Err(err) => self.presenter.show_error(&err.to_string()),
            },
            Err(err) => self.presenter.show_error(&err.to_string()),
        }
    }

    /// Replace the engine's constraint sets from the current editor
    /// contents, then validate the document against them.
    pub async fn reload_constraints(&mut self) {
        let core = match self.core_constraints.current_value() {
            Ok(text) => text,
            Err(err) => return self.presenter.show_error(&err.to_string()),
        };
        let type_tag = match self.type_tag_constraints.current_value() {
            Ok(text) => text,
            Err(err) => return self.presenter.show_error(&err.to_string()),
        };

        match self.engine.load_constraints(report::encode_all([core, type_tag])).await {
            Ok(()) => self.validate_document().await,
            // Validating against a stale or absent schema would mislead, so
            // a failed load stops the chain here.
            Err(err) => self.presenter.show_error(&format!("Invalid constraints: {err}")),
        }
    }
}
