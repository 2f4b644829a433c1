use crate::constants::{BROCHURE_PATH, BROCHURE_TITLE, DEFAULT_ORIGIN};
use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Site-wide configuration.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfigInner {
    pub site: SiteSection,
    pub registration: RegistrationConfig,
    pub brochure: BrochureConfig,
    pub theme: ThemeConfig,
}

/// Arc-wrapped config, cheap to clone into slices.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct SiteConfig {
    #[serde(flatten, default)]
    inner: Arc<SiteConfigInner>,
}

impl Deref for SiteConfig {
    type Target = SiteConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for SiteConfig {
    fn deref_mut(&mut self) -> &mut SiteConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Where the site is served from.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteSection {
    /// Absolute origin used to resolve shareable links, e.g. `https://otsav.example.edu`.
    pub origin: String,
}

/// Timings of the registration flow.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RegistrationConfig {
    /// Latency of the simulated submission sink.
    pub submit_delay_ms: u64,
    /// How long the "submitted" state is shown before the form re-opens.
    pub reset_delay_ms: u64,
    /// Upper bound for a single submission; `0` disables the limit.
    pub timeout_ms: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BrochureConfig {
    pub path: String,
    pub title: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// JSON file holding the persisted preference.
    pub store_path: PathBuf,
    /// Preference used before anything was persisted (`light`, `dark` or `system`).
    pub default: String,
}

impl RegistrationConfig {
    #[must_use]
    pub const fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }

    #[must_use]
    pub const fn reset_delay(&self) -> Duration {
        Duration::from_millis(self.reset_delay_ms)
    }

    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        if self.timeout_ms == 0 { None } else { Some(Duration::from_millis(self.timeout_ms)) }
    }
}

// --- Default ---

impl Default for SiteSection {
    fn default() -> Self {
        Self { origin: DEFAULT_ORIGIN.to_owned() }
    }
}

impl Default for RegistrationConfig {
    fn default() -> Self {
        Self { submit_delay_ms: 1500, reset_delay_ms: 3000, timeout_ms: 10_000 }
    }
}

impl Default for BrochureConfig {
    fn default() -> Self {
        Self { path: BROCHURE_PATH.to_owned(), title: BROCHURE_TITLE.to_owned() }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self { store_path: PathBuf::from("theme.json"), default: "system".to_owned() }
    }
}
