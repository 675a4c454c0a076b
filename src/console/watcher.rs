//! Source Change Watcher
//!
//! One filesystem watcher covering the parent directories of the three
//! edited files. Watching directories rather than the files themselves
//! keeps rename-replace editor saves visible. Events are classified back
//! to the source they belong to and forwarded over a channel.

use std::path::{Path, PathBuf};

use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc::UnboundedSender;

use crate::console::sources::SourceKind;

/// Paths of the three watched sources.
#[derive(Debug, Clone)]
pub struct SourcePaths {
    pub document: PathBuf,
    pub core_constraints: PathBuf,
    pub type_tag_constraints: PathBuf,
}

impl SourcePaths {
    fn routes(&self) -> Vec<(PathBuf, SourceKind)> {
        vec![
            (self.document.clone(), SourceKind::Document),
            (self.core_constraints.clone(), SourceKind::CoreConstraints),
            (
                self.type_tag_constraints.clone(),
                SourceKind::TypeTagConstraints,
            ),
        ]
    }
}

/// Start watching the sources, forwarding change notifications to `tx`.
///
/// The returned watcher must stay alive for as long as notifications are
/// wanted.
pub fn watch_sources(
    paths: &SourcePaths,
    tx: UnboundedSender<SourceKind>,
) -> notify::Result<RecommendedWatcher> {
    let routes = paths.routes();

    let mut directories: Vec<PathBuf> = routes
        .iter()
        .filter_map(|(path, _)| path.parent().map(Path::to_path_buf))
        .collect();
    directories.sort();
    directories.dedup();

    let mut watcher = notify::recommended_watcher(move |result: notify::Result<Event>| {
        match result {
            Ok(event) => {
                for kind in classify(&routes, &event) {
                    // A send failure means the console is shutting down.
                    let _ = tx.send(kind);
                }
            }
            Err(err) => log::warn!("file watcher error: {err}"),
        }
    })?;

    for directory in &directories {
        watcher.watch(directory, RecursiveMode::NonRecursive)?;
        log::debug!("watching {}", directory.display());
    }

    Ok(watcher)
}

/// Map one filesystem event to the sources it touches, deduplicated.
fn classify(routes: &[(PathBuf, SourceKind)], event: &Event) -> Vec<SourceKind> {
    if matches!(event.kind, EventKind::Access(_)) {
        return Vec::new();
    }

    let mut kinds = Vec::new();

    for path in &event.paths {
        for (route, kind) in routes {
            if paths_match(route, path) && !kinds.contains(kind) {
                kinds.push(*kind);
            }
        }
    }

    kinds
}

// Event paths are absolute while configured routes may be relative, so a
// direct comparison is backed up by a file-name one. Only the parent
// directories of the routes are watched, which keeps the fallback honest.
fn paths_match(route: &Path, event_path: &Path) -> bool {
    if route == event_path {
        return true;
    }

    match (route.file_name(), event_path.file_name()) {
        (Some(route_name), Some(event_name)) => route_name == event_name,
        _ => false,
    }
}
