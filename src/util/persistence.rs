use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde_json::Error as SerdeError;

use crate::domain::app_state::PersistedState;

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "FreightQuoteDesk";
const APP_NAME: &str = "FreightQuoteDesk";

/// Overrides the directory holding `state.json`.
pub const DATA_DIR_ENV: &str = "FREIGHT_DESK_DATA_DIR";

pub fn data_dir() -> Option<PathBuf> {
    if let Some(dir) = std::env::var_os(DATA_DIR_ENV).filter(|value| !value.is_empty()) {
        return Some(PathBuf::from(dir));
    }
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME).map(|dirs| dirs.config_dir().to_path_buf())
}

fn data_file() -> Option<PathBuf> {
    data_dir().map(|dir| dir.join("state.json"))
}

pub fn load_persisted_state() -> Option<PersistedState> {
    let path = data_file()?;
    load_from(&path)
}

pub fn save_persisted_state(state: &PersistedState) -> Result<(), PersistSaveError> {
    let path = data_file().ok_or(PersistSaveError::StorageUnavailable)?;
    save_to(&path, state)
}

/// Missing or unreadable files yield `None`; a corrupt file is logged and
/// ignored so the app still starts.
pub fn load_from(path: &Path) -> Option<PersistedState> {
    if !path.exists() {
        log::info!("[persist] No saved state at {}", path.display());
        return None;
    }
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(err) => {
            log::warn!("[persist] Failed to read {}: {err}", path.display());
            return None;
        }
    };
    match serde_json::from_str(&data) {
        Ok(state) => {
            log::info!("[persist] Loaded saved state from {}", path.display());
            Some(state)
        }
        Err(err) => {
            log::warn!("[persist] Ignoring corrupt state file {}: {err}", path.display());
            None
        }
    }
}

pub fn save_to(path: &Path, state: &PersistedState) -> Result<(), PersistSaveError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(state)?;
    fs::write(path, json)?;
    log::debug!("[persist] Saved state to {}", path.display());
    Ok(())
}

#[derive(Debug, thiserror::Error)]
pub enum PersistSaveError {
    #[error("storage directory unavailable")]
    StorageUnavailable,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] SerdeError),
}
