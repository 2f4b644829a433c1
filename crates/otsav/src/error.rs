use otsav_brochure::BrochureError;
use otsav_kernel::config::ConfigError;
use otsav_theme::ThemeError;
use std::borrow::Cow;

#[otsav_derive::otsav_error]
pub enum FestivalError {
    #[error("Configuration error{}: {source}", format_context(.context))]
    Config { source: ConfigError, context: Option<Cow<'static, str>> },

    #[error("Brochure setup failed{}: {source}", format_context(.context))]
    Brochure { source: BrochureError, context: Option<Cow<'static, str>> },

    #[error("Theme setup failed{}: {source}", format_context(.context))]
    Theme { source: ThemeError, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
