//! Fixed strings of the festival site.

pub const FESTIVAL_NAME: &str = "SANDIPOTSAV 2K26";

/// Public path of the brochure PDF.
pub const BROCHURE_PATH: &str = "/SandipOtsav.pdf";
pub const BROCHURE_TITLE: &str = "SANDIPOTSAV 2K26 Sponsorship Proposal";

pub const DEFAULT_ORIGIN: &str = "http://localhost:8080";

/// Storage key of the theme preference.
pub const THEME_STORAGE_KEY: &str = "theme";

pub const REGISTRATION_SUCCESS_MESSAGE: &str = "Registration successful! We'll contact you soon.";
pub const LINK_COPIED_MESSAGE: &str = "PDF link copied!";
