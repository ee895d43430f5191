//! JSON persistence for the signal batch.
//!
//! One file, pretty-printed JSON, written to a `.tmp` sibling and
//! atomically renamed into place. Loading is tolerant: a missing, empty
//! or corrupt file comes back as the empty batch with a warning, so a
//! bad store never takes the pipeline down.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;

use signal_graph_core::types::Signal;

use crate::error::IngestResult;

/// File-backed store for the collected signal batch.
pub struct SignalStore {
    path: PathBuf,
}

impl SignalStore {
    /// Create a store over the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the underlying JSON file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted batch, or the empty batch when the file is
    /// missing, empty or unreadable.
    pub fn load(&self) -> Vec<Signal> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(_) => return Vec::new(),
        };
        if content.trim().is_empty() {
            return Vec::new();
        }
        match serde_json::from_str(&content) {
            Ok(signals) => signals,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "corrupt signal store, starting empty");
                Vec::new()
            }
        }
    }

    /// Persist the batch atomically (write `.tmp`, then rename).
    pub fn save(&self, signals: &[Signal]) -> IngestResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let tmp = self.path.with_extension("json.tmp");
        let content = serde_json::to_string_pretty(signals)?;
        fs::write(&tmp, content)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}
