//! Client display preference (light or dark theme).
//!
//! Preferences are loaded and saved through a [`PreferenceStore`] passed to
//! whoever needs them; there is no global.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

/// File name inside the parrot config directory.
pub const PREFERENCES_FILE: &str = "preferences.json";

/// Errors that can occur when persisting preferences.
#[derive(Debug, Error)]
pub enum PreferenceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("No config directory available on this platform")]
    NoConfigDir,
}

/// User display preference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preference {
    #[serde(default)]
    pub dark_mode: bool,
}

impl Preference {
    /// The same preference with dark mode flipped.
    pub fn toggled(self) -> Self {
        Self {
            dark_mode: !self.dark_mode,
        }
    }

    pub fn mode_name(&self) -> &'static str {
        if self.dark_mode { "dark" } else { "light" }
    }
}

/// Loads and saves a [`Preference`].
pub trait PreferenceStore {
    /// Returns the saved preference, or the default when none is readable.
    fn load(&self) -> Preference;

    fn save(&self, preference: Preference) -> Result<(), PreferenceError>;
}

/// JSON file backed preference store.
#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    path: PathBuf,
}

impl FilePreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<platform config dir>/parrot/preferences.json`.
    pub fn default_location() -> Result<Self, PreferenceError> {
        let dir = dirs::config_dir().ok_or(PreferenceError::NoConfigDir)?;
        Ok(Self::new(dir.join("parrot").join(PREFERENCES_FILE)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn load(&self) -> Preference {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) => {
                debug!(path = %self.path.display(), error = %e, "no saved preference");
                return Preference::default();
            }
        };
        serde_json::from_str(&raw).unwrap_or_else(|e| {
            warn!(path = %self.path.display(), error = %e, "ignoring unreadable preference file");
            Preference::default()
        })
    }

    fn save(&self, preference: Preference) -> Result<(), PreferenceError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&preference)?;
        fs::write(&self.path, json)?;
        debug!(path = %self.path.display(), mode = preference.mode_name(), "saved preference");
        Ok(())
    }
}

/// In-memory preference store.
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    current: Mutex<Preference>,
}

impl MemoryPreferenceStore {
    pub fn new(initial: Preference) -> Self {
        Self {
            current: Mutex::new(initial),
        }
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn load(&self) -> Preference {
        *self.current.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn save(&self, preference: Preference) -> Result<(), PreferenceError> {
        *self.current.lock().unwrap_or_else(|e| e.into_inner()) = preference;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_loads_default() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = FilePreferenceStore::new(dir.path().join("absent.json"));
        assert_eq!(store.load(), Preference::default());
    }

    #[test]
    fn file_round_trip_creates_parent_dirs() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = FilePreferenceStore::new(dir.path().join("nested").join(PREFERENCES_FILE));

        store.save(Preference { dark_mode: true }).expect("save");

        assert!(store.path().exists());
        assert_eq!(store.load(), Preference { dark_mode: true });
    }

    #[test]
    fn corrupt_file_loads_default() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(PREFERENCES_FILE);
        fs::write(&path, "not json").expect("write");

        assert_eq!(FilePreferenceStore::new(path).load(), Preference::default());
    }

    #[test]
    fn file_format_is_camel_case() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = FilePreferenceStore::new(dir.path().join(PREFERENCES_FILE));
        store.save(Preference { dark_mode: true }).expect("save");

        let raw = fs::read_to_string(store.path()).expect("read");
        assert!(raw.contains("\"darkMode\": true"), "got: {raw}");
    }

    #[test]
    fn memory_store_keeps_last_save() {
        let store = MemoryPreferenceStore::default();
        assert!(!store.load().dark_mode);
        store.save(store.load().toggled()).expect("save");
        assert!(store.load().dark_mode);
        assert_eq!(store.load().mode_name(), "dark");
    }
}
