use std::fs;
use std::path::Path;
use std::time::Duration;

use docvet::console::SourceKind;
use docvet::console::watcher::{SourcePaths, watch_sources};
use tempfile::TempDir;
use tokio::sync::mpsc::{self, UnboundedReceiver};
use tokio::time::timeout;

const EVENT_TIMEOUT: Duration = Duration::from_secs(10);

fn workspace(dir: &Path) -> SourcePaths {
    let paths = SourcePaths {
        document: dir.join("document.json"),
        core_constraints: dir.join("core.json"),
        type_tag_constraints: dir.join("type-tag.json"),
    };

    fs::write(&paths.document, "{}").unwrap();
    fs::write(&paths.core_constraints, "{}").unwrap();
    fs::write(&paths.type_tag_constraints, "{}").unwrap();

    paths
}

/// Wait for `want`, tolerating duplicate notifications from earlier writes.
async fn expect_kind(rx: &mut UnboundedReceiver<SourceKind>, want: SourceKind) {
    loop {
        let received = timeout(EVENT_TIMEOUT, rx.recv())
            .await
            .unwrap_or_else(|_| panic!("timed out waiting for {want:?}"))
            .expect("change stream closed");

        if received == want {
            return;
        }
    }
}

#[tokio::test]
async fn saves_are_classified_to_their_source() {
    let dir = TempDir::new().unwrap();
    let paths = workspace(dir.path());

    let (tx, mut rx) = mpsc::unbounded_channel();
    let _watcher = watch_sources(&paths, tx).unwrap();

    // Give the watcher a moment to arm before the first write.
    tokio::time::sleep(Duration::from_millis(250)).await;

    fs::write(&paths.document, r#"{"edited":1}"#).unwrap();
    expect_kind(&mut rx, SourceKind::Document).await;

    fs::write(&paths.core_constraints, r#"{"edited":2}"#).unwrap();
    expect_kind(&mut rx, SourceKind::CoreConstraints).await;

    fs::write(&paths.type_tag_constraints, r#"{"edited":3}"#).unwrap();
    expect_kind(&mut rx, SourceKind::TypeTagConstraints).await;
}

#[tokio::test]
async fn rename_replace_saves_are_still_seen() {
    let dir = TempDir::new().unwrap();
    let paths = workspace(dir.path());

    let (tx, mut rx) = mpsc::unbounded_channel();
    let _watcher = watch_sources(&paths, tx).unwrap();

    tokio::time::sleep(Duration::from_millis(250)).await;

    // Editors commonly write to a scratch file and rename it over the
    // target; the directory watch has to catch the rename.
    let scratch = dir.path().join(".document.json.swp");
    fs::write(&scratch, r#"{"edited":true}"#).unwrap();
    fs::rename(&scratch, &paths.document).unwrap();

    expect_kind(&mut rx, SourceKind::Document).await;
}
