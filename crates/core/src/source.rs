//! Line source abstraction.
//!
//! The [`LineSource`] trait owns the only file I/O in the system: the
//! checker itself consumes pre-split lines and never touches `std::fs`.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Supplies a program as an ordered sequence of lines.
///
/// The default [`FileSystemSource`] delegates to `std::fs`;
/// [`InMemorySource`] serves tests and embedding without filesystem
/// access.
pub trait LineSource {
    /// Read the program at `path` and split it on line boundaries.
    fn read_lines(&self, path: &Path) -> Result<Vec<String>, std::io::Error>;
}

/// Default filesystem-backed line source.
pub struct FileSystemSource;

impl LineSource for FileSystemSource {
    fn read_lines(&self, path: &Path) -> Result<Vec<String>, std::io::Error> {
        let text = std::fs::read_to_string(path)?;
        Ok(text.lines().map(str::to_owned).collect())
    }
}

/// In-memory line source: a map of paths to program text.
pub struct InMemorySource {
    files: HashMap<PathBuf, String>,
}

impl InMemorySource {
    pub fn new(files: HashMap<PathBuf, String>) -> Self {
        Self { files }
    }
}

impl LineSource for InMemorySource {
    fn read_lines(&self, path: &Path) -> Result<Vec<String>, std::io::Error> {
        match self.files.get(path) {
            Some(text) => Ok(text.lines().map(str::to_owned).collect()),
            None => Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("file not found in memory: {}", path.display()),
            )),
        }
    }
}
