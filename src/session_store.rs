//! Saves the in-progress session between runs.

use crate::engine::SessionSnapshot;
use crate::{debug_log, info_log};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

const APP_DIR: &str = "unscramble";
const SESSION_FILE: &str = "session.json";
const LOG_FILE: &str = "unscramble.log";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("session file I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("session file is malformed: {0}")]
    Format(#[from] serde_json::Error),
}

fn app_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join(APP_DIR))
}

#[must_use]
pub fn get_session_path() -> Option<PathBuf> {
    app_dir().map(|dir| dir.join(SESSION_FILE))
}

#[must_use]
pub fn get_log_path() -> Option<PathBuf> {
    app_dir().map(|dir| dir.join(LOG_FILE))
}

/// Read a saved snapshot. A missing file is `Ok(None)`.
pub fn read_snapshot(path: &Path) -> Result<Option<SessionSnapshot>, StoreError> {
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    let snapshot = serde_json::from_str(&data)?;
    debug_log!("read_snapshot() - loaded {}", path.display());
    Ok(Some(snapshot))
}

pub fn write_snapshot(path: &Path, snapshot: &SessionSnapshot) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let data = serde_json::to_string_pretty(snapshot)?;
    fs::write(path, data)?;
    info_log!("write_snapshot() - saved session to {}", path.display());
    Ok(())
}

/// Remove a saved snapshot if there is one.
pub fn clear_snapshot(path: &Path) -> Result<(), StoreError> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e.into()),
    }
}
