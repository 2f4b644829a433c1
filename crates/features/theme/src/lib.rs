//! # Theme
//!
//! Light, dark or "whatever the system says". The preference is persisted through a
//! [`ThemeStore`]; the applied [`Theme`] is resolved against the platform's dark-mode
//! flag, which callers pass in because only the presentation layer knows it.
//!
//! Toggling flips the *applied* theme and stores it as an explicit choice, so a user on
//! `system` with a dark desktop who toggles ends up on `light`.

mod error;
mod preference;
mod store;

pub use crate::error::{ThemeError, ThemeErrorExt};
pub use crate::preference::{Theme, ThemePreference};
pub use crate::store::{FileThemeStore, MemoryThemeStore, ThemeStore};

use otsav_domain::config::ThemeConfig;
use parking_lot::RwLock;
use tracing::info;

#[derive(Debug)]
pub struct ThemeController<S> {
    store: S,
    preference: RwLock<ThemePreference>,
}

impl<S: ThemeStore> ThemeController<S> {
    /// Reads the stored preference, falling back to `default`.
    ///
    /// # Errors
    /// Propagates store read failures.
    pub fn load(store: S, default: ThemePreference) -> Result<Self, ThemeError> {
        let preference = store.load()?.unwrap_or(default);
        Ok(Self { store, preference: RwLock::new(preference) })
    }

    #[must_use]
    pub fn preference(&self) -> ThemePreference {
        *self.preference.read()
    }

    #[must_use]
    pub fn resolved(&self, system_is_dark: bool) -> Theme {
        self.preference().resolve(system_is_dark)
    }

    /// Switches to the opposite of the applied theme and persists it.
    ///
    /// # Errors
    /// Propagates store write failures; the in-memory preference is left unchanged.
    pub fn toggle(&self, system_is_dark: bool) -> Result<Theme, ThemeError> {
        let mut preference = self.preference.write();
        let next = preference.resolve(system_is_dark).opposite();
        self.store.save(next.into())?;
        *preference = next.into();
        drop(preference);

        info!(theme = %next, "Theme toggled");
        Ok(next)
    }

    /// # Errors
    /// Propagates store write failures; the in-memory preference is left unchanged.
    pub fn set(&self, preference: ThemePreference) -> Result<(), ThemeError> {
        let mut current = self.preference.write();
        self.store.save(preference)?;
        *current = preference;
        drop(current);

        info!(%preference, "Theme preference set");
        Ok(())
    }
}

impl ThemeController<FileThemeStore> {
    /// Opens the file store named in the configuration.
    ///
    /// # Errors
    /// * [`ThemeError::UnknownPreference`] if the configured default is not
    ///   `light`, `dark` or `system`.
    /// * Store read failures.
    pub fn from_config(config: &ThemeConfig) -> Result<Self, ThemeError> {
        let default = config.default.parse::<ThemePreference>().map_err(|_| {
            ThemeError::UnknownPreference {
                message: config.default.clone().into(),
                context: Some("theme.default".into()),
            }
        })?;
        Self::load(FileThemeStore::new(&config.store_path), default)
    }
}
