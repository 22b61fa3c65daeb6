//! Content scanning.
//!
//! Walks the content root and collects sidebar entries in traversal order.

use std::{
    fs,
    path::{Path, PathBuf},
};

use navgen_core::{Config, SidebarEntry};
use thiserror::Error;
use tracing::{debug, trace};

/// Content scanning errors.
#[derive(Debug, Error)]
pub enum ScanError {
    /// Content root missing.
    #[error("content root not found: {0}")]
    RootNotFound(PathBuf),

    /// Content root exists but is not a directory.
    #[error("content root is not a directory: {0}")]
    RootNotADirectory(PathBuf),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for scanner operations.
pub type Result<T> = std::result::Result<T, ScanError>;

/// Content scanner that walks the root directory and collects entries.
#[derive(Debug)]
pub struct ContentScanner {
    root: PathBuf,
    exclusions: Vec<PathBuf>,
}

impl ContentScanner {
    /// Create a new scanner for a root directory with resolved exclusion paths.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>, exclusions: Vec<PathBuf>) -> Self {
        Self {
            root: root.into(),
            exclusions,
        }
    }

    /// Create a scanner from configuration.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.content.root.clone(), config.excluded_paths())
    }

    /// Collect all sidebar entries under the content root, in traversal order.
    ///
    /// Fails before producing anything if the root is missing or not a
    /// directory. Any IO failure during the walk aborts the whole scan.
    pub fn scan(&self) -> Result<Vec<SidebarEntry>> {
        if !self.root.exists() {
            return Err(ScanError::RootNotFound(self.root.clone()));
        }
        if !self.root.is_dir() {
            return Err(ScanError::RootNotADirectory(self.root.clone()));
        }

        let mut entries = Vec::new();
        self.walk_dir(&self.root, &mut entries)?;

        debug!(count = entries.len(), "scan complete");
        Ok(entries)
    }

    /// Recursively walk a directory, appending entries to the accumulator.
    fn walk_dir(&self, dir: &Path, entries: &mut Vec<SidebarEntry>) -> Result<()> {
        // Sort each directory's children so traversal order does not depend
        // on readdir ordering.
        let mut children = Vec::new();
        for child in fs::read_dir(dir)? {
            children.push(child?.path());
        }
        children.sort();

        for path in children {
            if self.exclusions.iter().any(|excluded| *excluded == path) {
                trace!(path = %path.display(), "skipping excluded path");
                continue;
            }

            if path.is_dir() {
                self.walk_dir(&path, entries)?;
            } else if path.is_file() {
                let relative = path.strip_prefix(&self.root).unwrap_or(&path);
                if let Some(entry) = SidebarEntry::from_relative_path(relative) {
                    trace!(link = %entry.link, "collected entry");
                    entries.push(entry);
                }
            }
        }

        Ok(())
    }
}
