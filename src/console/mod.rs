//! Interactive Validation Console
//!
//! Watches the document and constraint files, revalidates through the
//! engine on every change, and renders the outcome to the terminal.

pub mod orchestrator;
pub mod presenter;
pub mod samples;
pub mod sources;
pub mod watcher;

pub use orchestrator::Orchestrator;
pub use presenter::Presenter;
pub use sources::{FileSource, SourceKind, TextSource};

use std::io::{self, IsTerminal};
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::sync::mpsc;

use crate::config::Config;
use crate::console::watcher::SourcePaths;
use crate::engine::ProcessEngine;

/// Run the console until the change stream closes.
pub async fn run(config: Config) -> Result<()> {
    let paths = SourcePaths {
        document: config.document.clone(),
        core_constraints: config.core_constraints.clone(),
        type_tag_constraints: config.type_tag_constraints.clone(),
    };

    samples::materialize(&paths).context("populate workspace samples")?;

    let engine = ProcessEngine::spawn(&config.engine)
        .with_context(|| format!("spawn validation engine `{}`", config.engine.program))?;

    let stdout = io::stdout();
    let clear_screen = config.clear_screen && stdout.is_terminal();

    let mut orchestrator = Orchestrator::new(
        Arc::new(engine),
        Box::new(FileSource::new(&paths.document)),
        Box::new(FileSource::new(&paths.core_constraints)),
        Box::new(FileSource::new(&paths.type_tag_constraints)),
        Presenter::new(stdout, clear_screen),
    );

    let (tx, mut rx) = mpsc::unbounded_channel();
    let _watcher = watcher::watch_sources(&paths, tx).context("watch source files")?;

    orchestrator.reload_constraints().await;

    // One change at a time: each triggered chain runs to completion before
    // the next notification is taken, so the display always reflects the
    // most recently processed edit.
    while let Some(kind) = rx.recv().await {
        orchestrator.handle_change(kind).await;
    }

    Ok(())
}
