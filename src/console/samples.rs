//! Sample Content
//!
//! Embedded starting content for the three edited files, so a fresh
//! workspace has something meaningful to validate on first launch.

use std::fs;
use std::io;
use std::path::Path;

use crate::console::watcher::SourcePaths;

const SAMPLE_DOCUMENT: &str = include_str!("../../resources/samples/document.json");
const SAMPLE_CORE_CONSTRAINTS: &str = include_str!("../../resources/samples/core.json");
const SAMPLE_TYPE_TAG_CONSTRAINTS: &str = include_str!("../../resources/samples/type-tag.json");

/// Fetch a named sample resource.
pub fn fetch(name: &str) -> Option<&'static str> {
    match name {
        "document" => Some(SAMPLE_DOCUMENT),
        "core-constraints" => Some(SAMPLE_CORE_CONSTRAINTS),
        "type-tag-constraints" => Some(SAMPLE_TYPE_TAG_CONSTRAINTS),
        _ => None,
    }
}

/// Create any missing source file from its sample. Existing files are
/// never overwritten.
pub fn materialize(paths: &SourcePaths) -> io::Result<()> {
    write_if_missing(&paths.document, SAMPLE_DOCUMENT)?;
    write_if_missing(&paths.core_constraints, SAMPLE_CORE_CONSTRAINTS)?;
    write_if_missing(&paths.type_tag_constraints, SAMPLE_TYPE_TAG_CONSTRAINTS)?;
    Ok(())
}

fn write_if_missing(path: &Path, contents: &str) -> io::Result<()> {
    if path.exists() {
        return Ok(());
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, contents)?;
    log::info!("created sample file {}", path.display());

    Ok(())
}
