//! Persistence of the theme preference.

use crate::error::{ThemeError, ThemeErrorExt};
use crate::preference::ThemePreference;
use parking_lot::Mutex;
use otsav_domain::constants::THEME_STORAGE_KEY;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Where the preference lives between runs.
pub trait ThemeStore: Send + Sync {
    /// `Ok(None)` when nothing was stored yet.
    ///
    /// # Errors
    /// Returns [`ThemeError`] when the backing storage cannot be read.
    fn load(&self) -> Result<Option<ThemePreference>, ThemeError>;

    /// # Errors
    /// Returns [`ThemeError`] when the backing storage cannot be written.
    fn save(&self, preference: ThemePreference) -> Result<(), ThemeError>;
}

/// JSON file store holding one object keyed by [`THEME_STORAGE_KEY`], e.g. `{"theme":"dark"}`.
///
/// A file that exists but does not hold a known preference is treated as empty.
#[derive(Debug, Clone)]
pub struct FileThemeStore {
    path: PathBuf,
}

impl FileThemeStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ThemeStore for FileThemeStore {
    fn load(&self) -> Result<Option<ThemePreference>, ThemeError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e).context("Reading theme preference"),
        };

        let stored = serde_json::from_str::<Map<String, Value>>(&raw).and_then(|mut object| {
            ThemePreference::deserialize(object.remove(THEME_STORAGE_KEY).unwrap_or(Value::Null))
        });
        match stored {
            Ok(preference) => Ok(Some(preference)),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Ignoring unreadable theme file");
                Ok(None)
            },
        }
    }

    fn save(&self, preference: ThemePreference) -> Result<(), ThemeError> {
        if let Some(dir) = self.path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(dir).context("Creating theme store directory")?;
        }
        let mut object = Map::new();
        object.insert(
            THEME_STORAGE_KEY.to_owned(),
            serde_json::to_value(preference).context("Encoding theme preference")?,
        );
        let json = Value::Object(object).to_string();
        fs::write(&self.path, json).context("Writing theme preference")?;

        debug!(path = %self.path.display(), %preference, "Theme preference saved");
        Ok(())
    }
}

/// Keeps the preference in memory only.
#[derive(Debug, Default)]
pub struct MemoryThemeStore {
    slot: Mutex<Option<ThemePreference>>,
}

impl MemoryThemeStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ThemeStore for MemoryThemeStore {
    fn load(&self) -> Result<Option<ThemePreference>, ThemeError> {
        Ok(*self.slot.lock())
    }

    fn save(&self, preference: ThemePreference) -> Result<(), ThemeError> {
        *self.slot.lock() = Some(preference);
        Ok(())
    }
}
