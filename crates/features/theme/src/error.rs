use std::borrow::Cow;

#[otsav_derive::otsav_error]
pub enum ThemeError {
    #[error("Theme store I/O error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("Theme serialization error{}: {source}", format_context(.context))]
    Serialize { source: serde_json::Error, context: Option<Cow<'static, str>> },

    #[error("Unknown theme preference{}: {message}", format_context(.context))]
    UnknownPreference { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal theme error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
