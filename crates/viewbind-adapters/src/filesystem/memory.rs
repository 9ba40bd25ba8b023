//! In-memory filesystem adapter for testing.

use std::{
    collections::HashSet,
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use viewbind_core::application::ports::Filesystem;
use viewbind_core::error::ViewbindResult;

/// In-memory filesystem for testing.
///
/// Clones share state, so a test can keep a handle while the binding pass
/// owns another.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashSet<PathBuf>,
    directories: HashSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a directory, including all its ancestors.
    pub fn add_dir(&self, path: impl Into<PathBuf>) {
        let path = path.into();
        let mut inner = self.inner.write().unwrap();
        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }
    }

    /// Add a file, creating parent directories implicitly.
    pub fn add_file(&self, path: impl Into<PathBuf>) {
        let path = path.into();
        if let Some(parent) = path.parent() {
            self.add_dir(parent);
        }
        self.inner.write().unwrap().files.insert(path);
    }

    /// Remove everything.
    pub fn clear(&self) {
        let mut inner = self.inner.write().unwrap();
        inner.files.clear();
        inner.directories.clear();
    }
}

impl Filesystem for MemoryFilesystem {
    fn is_dir(&self, path: &Path) -> bool {
        self.inner.read().unwrap().directories.contains(path)
    }

    fn list_dir(&self, path: &Path) -> ViewbindResult<Vec<PathBuf>> {
        let inner = self.inner.read().unwrap();
        let mut entries: Vec<PathBuf> = inner
            .files
            .iter()
            .chain(inner.directories.iter())
            .filter(|p| p.parent() == Some(path))
            .cloned()
            .collect();
        entries.sort();
        Ok(entries)
    }
}
