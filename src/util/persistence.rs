use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde_json::Error as SerdeError;
use tracing::{debug, warn};

use crate::domain::Preferences;

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "ProductListManager";
const APP_NAME: &str = "ProductListManager";

fn preferences_file() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join("preferences.json"))
}

/// Loads preferences from the config directory. Missing or unreadable files
/// yield `None` so the caller keeps the defaults.
pub fn load_preferences() -> Option<Preferences> {
    let path = preferences_file()?;
    load_preferences_from(&path)
}

pub fn save_preferences(preferences: &Preferences) -> Result<PathBuf, PersistSaveError> {
    let path = preferences_file().ok_or(PersistSaveError::StorageUnavailable)?;
    save_preferences_to(&path, preferences)?;
    Ok(path)
}

pub fn load_preferences_from(path: &Path) -> Option<Preferences> {
    let data = fs::read_to_string(path).ok()?;
    match serde_json::from_str(&data) {
        Ok(preferences) => {
            debug!(path = %path.display(), "loaded preferences");
            Some(preferences)
        }
        Err(err) => {
            warn!(path = %path.display(), error = %err, "ignoring malformed preferences file");
            None
        }
    }
}

pub fn save_preferences_to(path: &Path, preferences: &Preferences) -> Result<(), PersistSaveError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(preferences)?;
    fs::write(path, json)?;
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
