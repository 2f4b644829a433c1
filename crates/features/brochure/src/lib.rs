//! # Brochure
//!
//! The sponsorship brochure is a single PDF served by the site. This crate builds the
//! two links the page offers (download, open in a new view) and implements sharing
//! with its clipboard fallback.
//!
//! ```rust
//! use otsav_brochure::{Brochure, MemoryClipboard, ShareOutcome};
//! use otsav_event_bus::EventBus;
//!
//! let brochure =
//!     Brochure::new("https://otsav.example", "/SandipOtsav.pdf", "Proposal").unwrap();
//! let clipboard = MemoryClipboard::new();
//! let outcome = brochure.share(None, &clipboard, &EventBus::new());
//!
//! assert_eq!(outcome, ShareOutcome::Copied);
//! assert_eq!(clipboard.contents().as_deref(), Some("https://otsav.example/SandipOtsav.pdf"));
//! ```

mod error;
mod share;

pub use crate::error::{BrochureError, BrochureErrorExt};
pub use crate::share::{Clipboard, MemoryClipboard, NativeShare, ShareOutcome, SharePayload};

use otsav_domain::config::{BrochureConfig, SiteSection};
use otsav_event_bus::EventBus;
use serde::Serialize;
use url::Url;

const NEW_VIEW_TARGET: &str = "_blank";
const NEW_VIEW_REL: &str = "noopener noreferrer";

/// What following a link does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum LinkIntent {
    /// Save the file (`download` attribute).
    Download,
    /// Open in a new, isolated view.
    NewView,
}

/// An anchor the page renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BrochureLink {
    pub href: String,
    pub intent: LinkIntent,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rel: Option<&'static str>,
    /// Suggested file name for downloads.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
}

/// The published brochure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Brochure {
    title: String,
    path: String,
    url: Url,
}

impl Brochure {
    /// Resolves `path` against the site `origin`.
    ///
    /// # Errors
    /// * [`BrochureError::Url`] if either part does not parse.
    /// * [`BrochureError::InvalidOrigin`] for origins that are not `http` or `https`.
    pub fn new(
        origin: &str,
        path: &str,
        title: impl Into<String>,
    ) -> Result<Self, BrochureError> {
        let base = Url::parse(origin).context("Parsing site origin")?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(BrochureError::InvalidOrigin {
                message: format!("'{origin}' is not an http(s) origin").into(),
                context: None,
            });
        }
        let url = base.join(path).context("Joining brochure path")?;

        Ok(Self { title: title.into(), path: url.path().to_owned(), url })
    }

    /// # Errors
    /// See [`Brochure::new`].
    pub fn from_config(
        site: &SiteSection,
        brochure: &BrochureConfig,
    ) -> Result<Self, BrochureError> {
        Self::new(&site.origin, &brochure.path, brochure.title.clone())
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Site-relative path, e.g. `/SandipOtsav.pdf`.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Absolute URL: origin joined with the path.
    #[must_use]
    pub const fn url(&self) -> &Url {
        &self.url
    }

    #[must_use]
    pub fn file_name(&self) -> Option<&str> {
        self.url.path_segments()?.next_back().filter(|name| !name.is_empty())
    }

    #[must_use]
    pub fn download_link(&self) -> BrochureLink {
        BrochureLink {
            href: self.path.clone(),
            intent: LinkIntent::Download,
            target: None,
            rel: None,
            file_name: self.file_name().map(str::to_owned),
        }
    }

    #[must_use]
    pub fn view_link(&self) -> BrochureLink {
        BrochureLink {
            href: self.path.clone(),
            intent: LinkIntent::NewView,
            target: Some(NEW_VIEW_TARGET),
            rel: Some(NEW_VIEW_REL),
            file_name: None,
        }
    }

    #[must_use]
    pub fn share_payload(&self) -> SharePayload {
        SharePayload { title: self.title.clone(), url: self.url.clone() }
    }

    /// Shares the brochure, falling back to the clipboard and then to showing the URL.
    ///
    /// Confirmation and fallback messages are published as
    /// [`Notification`](otsav_domain::notification::Notification)s on `events`.
    pub fn share(
        &self,
        native: Option<&dyn NativeShare>,
        clipboard: &dyn Clipboard,
        events: &EventBus,
    ) -> ShareOutcome {
        share::share(&self.share_payload(), native, clipboard, events)
    }
}
