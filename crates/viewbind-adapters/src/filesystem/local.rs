//! Local filesystem adapter using std::fs.

use std::io;
use std::path::{Path, PathBuf};

use viewbind_core::application::ports::Filesystem;
use viewbind_core::application::ApplicationError;
use viewbind_core::error::ViewbindResult;

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn list_dir(&self, path: &Path) -> ViewbindResult<Vec<PathBuf>> {
        let read_dir = std::fs::read_dir(path).map_err(|e| map_io_error(path, e))?;

        let mut entries = Vec::new();
        for entry in read_dir {
            let entry = entry.map_err(|e| map_io_error(path, e))?;
            entries.push(entry.path());
        }
        // Directory order is platform-dependent; scans must be deterministic.
        entries.sort();
        Ok(entries)
    }
}

fn map_io_error(path: &Path, e: io::Error) -> viewbind_core::error::ViewbindError {
    ApplicationError::DirectoryList {
        dir: path.to_path_buf(),
        reason: e.to_string(),
    }
    .into()
}
