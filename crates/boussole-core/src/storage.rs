//! Snapshot persistence
//!
//! The store persists its whole state as one JSON document under a
//! fixed namespace. Persistence is a key-value collaborator behind the
//! [`SnapshotStorage`] trait so the CLI can run against a real file
//! and tests against memory.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::error::{Error, Result};
use crate::store::AppState;

/// Fixed namespace for the persisted snapshot
pub const SNAPSHOT_NAMESPACE: &str = "boussole";

/// Key-value collaborator that holds the serialized application state
pub trait SnapshotStorage: Send {
    /// Read the snapshot, if one exists
    fn load(&self) -> Result<Option<AppState>>;

    /// Write the snapshot, replacing any previous one
    fn save(&self, state: &AppState) -> Result<()>;
}

/// Snapshot stored as a single JSON file on disk
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    /// Storage rooted at `dir`, using the fixed namespace file name
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(format!("{}.json", SNAPSHOT_NAMESPACE)),
        }
    }

    /// Platform default data directory (~/.local/share/boussole on
    /// Linux)
    pub fn default_dir() -> Result<PathBuf> {
        dirs::data_dir()
            .map(|d| d.join(SNAPSHOT_NAMESPACE))
            .ok_or_else(|| Error::Snapshot("No platform data directory available".to_string()))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotStorage for JsonFileStorage {
    fn load(&self) -> Result<Option<AppState>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let bytes = std::fs::read(&self.path)?;
        let state = serde_json::from_slice(&bytes)?;
        Ok(Some(state))
    }

    fn save(&self, state: &AppState) -> Result<()> {
        let dir = self
            .path
            .parent()
            .ok_or_else(|| Error::Snapshot(format!("Invalid snapshot path: {}", self.path.display())))?;
        std::fs::create_dir_all(dir)?;

        // Write-then-rename so a crash mid-write never truncates the
        // previous snapshot
        let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
        serde_json::to_writer_pretty(&mut tmp, state)?;
        tmp.flush()?;
        tmp.persist(&self.path)
            .map_err(|e| Error::Snapshot(format!("Failed to persist snapshot: {}", e)))?;

        tracing::debug!(path = %self.path.display(), "Snapshot written");
        Ok(())
    }
}

/// In-memory storage for tests and `--ephemeral` runs
#[derive(Default)]
pub struct MemoryStorage {
    state: Mutex<Option<AppState>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SnapshotStorage for MemoryStorage {
    fn load(&self) -> Result<Option<AppState>> {
        Ok(self.state.lock().expect("storage lock poisoned").clone())
    }

    fn save(&self, state: &AppState) -> Result<()> {
        *self.state.lock().expect("storage lock poisoned") = Some(state.clone());
        Ok(())
    }
}
