//! Facade crate for the festival site.
//! Re-exports domain/kernel primitives and wires the feature slices from one
//! [`SiteConfig`](domain::config::SiteConfig).
//! Keep this crate thin: it composes other crates, it does not implement business logic.
//!
//! ## Usage
//! ```rust,no_run
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let festival = otsav::Festival::load(None::<&str>)?;
//! println!("{}", festival.brochure().url());
//! # Ok(())
//! # }
//! ```

mod error;

pub use crate::error::{FestivalError, FestivalErrorExt};
pub use otsav_domain as domain;
pub use otsav_event_bus as events;
pub use otsav_kernel as kernel;

/// The feature slices.
pub mod features {
    pub use otsav_brochure as brochure;
    pub use otsav_registration as registration;
    pub use otsav_theme as theme;
}

use otsav_brochure::Brochure;
use otsav_domain::config::SiteConfig;
use otsav_event_bus::EventBus;
use otsav_registration::{FormController, SimulatedSink};
use otsav_theme::{FileThemeStore, ThemeController};
use std::path::Path;
use tracing::debug;

/// Registration form backed by the simulated sink.
pub type RegistrationForm = FormController<SimulatedSink>;

/// Everything the site page needs, built from one configuration.
#[derive(Debug)]
pub struct Festival {
    config: SiteConfig,
    events: EventBus,
    registration: RegistrationForm,
    brochure: Brochure,
    theme: ThemeController<FileThemeStore>,
}

impl Festival {
    /// Loads configuration (see [`kernel::config::load_config`]) and builds the site.
    ///
    /// # Errors
    /// Returns [`FestivalError`] if the configuration cannot be loaded or a slice rejects it.
    pub fn load(path: Option<impl AsRef<Path>>) -> Result<Self, FestivalError> {
        let config: SiteConfig = otsav_kernel::config::load_config(path)?;
        Self::init(config)
    }

    /// # Errors
    /// * [`FestivalError::Brochure`] for an unusable site origin or brochure path.
    /// * [`FestivalError::Theme`] for an unknown default theme or an unreadable store.
    pub fn init(config: SiteConfig) -> Result<Self, FestivalError> {
        let events = EventBus::new();

        let sink = SimulatedSink::from_config(&config.registration);
        let registration = FormController::from_config(sink, events.clone(), &config.registration);

        let brochure = Brochure::from_config(&config.site, &config.brochure)
            .context("Resolving brochure link")?;
        let theme = ThemeController::from_config(&config.theme).context("Opening theme store")?;

        debug!(origin = %config.site.origin, "Festival site initialized");
        Ok(Self { config, events, registration, brochure, theme })
    }

    #[must_use]
    pub const fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// Bus carrying [`Notification`](domain::notification::Notification)s from every slice.
    #[must_use]
    pub const fn events(&self) -> &EventBus {
        &self.events
    }

    #[must_use]
    pub const fn registration(&self) -> &RegistrationForm {
        &self.registration
    }

    #[must_use]
    pub const fn brochure(&self) -> &Brochure {
        &self.brochure
    }

    #[must_use]
    pub const fn theme(&self) -> &ThemeController<FileThemeStore> {
        &self.theme
    }
}
