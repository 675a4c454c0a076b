//! Text Sources
//!
//! The document and both constraint sets are plain files the user edits
//! with whatever editor they like; the console only ever reads them.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Which of the three edited sources changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Document,
    CoreConstraints,
    TypeTagConstraints,
}

/// Provider of current text content for one edited source.
pub trait TextSource: Send {
    fn current_value(&self) -> io::Result<String>;
}

/// Text source backed by a file, read fresh on every call.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TextSource for FileSource {
    fn current_value(&self) -> io::Result<String> {
        fs::read_to_string(&self.path)
    }
}
