use std::fs;
use std::path::{Path, PathBuf};

use crate::io::paths::atomic_write;
use crate::model::task::TaskEntry;

/// Error type for record-store I/O
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("could not serialize: {0}")]
    Serialize(serde_json::Error),
    #[error("could not write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Load the task store. A missing file is an empty list; unreadable or
/// malformed content is a hard error, never partial state. Legacy
/// status spellings and missing task types are migrated by the entry
/// deserializer, so the next save rewrites them in the current form.
pub fn load_tasks(path: &Path) -> Result<Vec<TaskEntry>, StoreError> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let content = fs::read_to_string(path).map_err(|e| StoreError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    serde_json::from_str(&content).map_err(|e| StoreError::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Save the task store atomically, pretty-printed.
pub fn save_tasks(path: &Path, entries: &[TaskEntry]) -> Result<(), StoreError> {
    let content = serde_json::to_string_pretty(entries).map_err(StoreError::Serialize)?;
    atomic_write(path, content.as_bytes()).map_err(|e| StoreError::Write {
        path: path.to_path_buf(),
        source: e,
    })
}
