//! Sharing the brochure link.
//!
//! A platform share sheet is used when one exists. Otherwise, or when it fails, the
//! absolute URL goes to the clipboard. If even the clipboard is out of reach the user
//! is shown the URL to copy by hand. None of these paths is an error for the caller.

use crate::error::BrochureError;
use otsav_domain::constants::LINK_COPIED_MESSAGE;
use otsav_domain::notification::Notification;
use otsav_event_bus::EventBus;
use parking_lot::Mutex;
use serde::Serialize;
use tracing::{debug, info, warn};
use url::Url;

/// What a share sheet receives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SharePayload {
    pub title: String,
    pub url: Url,
}

/// How a share request ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareOutcome {
    /// Handed to the platform share sheet.
    Shared,
    /// Copied to the clipboard and confirmed to the user.
    Copied,
    /// Neither worked; the user was shown the URL.
    Manual { url: Url },
}

/// Platform share capability (a share sheet or an OS intent).
pub trait NativeShare: Send + Sync {
    /// # Errors
    /// Returns [`BrochureError::Share`] when the sheet cannot be shown.
    fn share(&self, payload: &SharePayload) -> Result<(), BrochureError>;
}

pub trait Clipboard: Send + Sync {
    /// # Errors
    /// Returns [`BrochureError::Clipboard`] when the text could not be placed.
    fn write_text(&self, text: &str) -> Result<(), BrochureError>;
}

/// Process-local clipboard, for headless use and tests.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: Mutex<Option<String>>,
}

impl MemoryClipboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn contents(&self) -> Option<String> {
        self.contents.lock().clone()
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&self, text: &str) -> Result<(), BrochureError> {
        *self.contents.lock() = Some(text.to_owned());
        Ok(())
    }
}

pub(crate) fn share(
    payload: &SharePayload,
    native: Option<&dyn NativeShare>,
    clipboard: &dyn Clipboard,
    events: &EventBus,
) -> ShareOutcome {
    if let Some(native) = native {
        match native.share(payload) {
            Ok(()) => {
                info!(url = %payload.url, "Brochure shared");
                return ShareOutcome::Shared;
            },
            Err(e) => warn!(error = %e, "Native share failed, falling back to clipboard"),
        }
    } else {
        debug!("No native share capability, using clipboard");
    }

    match clipboard.write_text(payload.url.as_str()) {
        Ok(()) => {
            info!(url = %payload.url, "Brochure link copied");
            notify(events, Notification::success(LINK_COPIED_MESSAGE));
            ShareOutcome::Copied
        },
        Err(e) => {
            warn!(error = %e, "Clipboard write failed");
            notify(events, Notification::info(format!("Copy the brochure link: {}", payload.url)));
            ShareOutcome::Manual { url: payload.url.clone() }
        },
    }
}

fn notify(events: &EventBus, notification: Notification) {
    if let Err(e) = events.publish(notification) {
        warn!(error = %e, "Failed to publish notification");
    }
}
