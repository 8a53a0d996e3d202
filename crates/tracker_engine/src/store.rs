use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracker_core::History;
use tracker_logging::{tracker_info, tracker_warn};

use crate::persist::{AtomicFileWriter, PersistError};

/// The history file at one location.
#[derive(Debug, Clone)]
pub struct HistoryStore {
    path: PathBuf,
}

impl HistoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the history. Missing, unreadable or malformed files yield an
    /// empty history; this never fails.
    pub fn load(&self) -> History {
        let content = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracker_info!("No history at {:?}; starting empty", self.path);
                return History::new();
            }
            Err(err) => {
                tracker_warn!("Failed to read history from {:?}: {}", self.path, err);
                return History::new();
            }
        };

        match serde_json::from_str::<History>(&content) {
            Ok(history) => {
                tracker_info!("Loaded {} entries from {:?}", history.len(), self.path);
                history
            }
            Err(err) => {
                tracker_warn!("Failed to parse history from {:?}: {}", self.path, err);
                History::new()
            }
        }
    }

    /// Writes the whole history, sorted by name, replacing the previous file.
    pub fn save(&self, history: &History) -> Result<PathBuf, PersistError> {
        let mut sorted = history.clone();
        sorted.sort_by_name();
        let mut content = serde_json::to_string_pretty(&sorted)?;
        content.push('\n');
        AtomicFileWriter::new(self.path.clone()).write(&content)
    }
}
