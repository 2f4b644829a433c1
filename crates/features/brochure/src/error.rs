use std::borrow::Cow;

#[otsav_derive::otsav_error]
pub enum BrochureError {
    #[error("Invalid brochure URL{}: {source}", format_context(.context))]
    Url { source: url::ParseError, context: Option<Cow<'static, str>> },

    #[error("Unsupported site origin{}: {message}", format_context(.context))]
    InvalidOrigin { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The platform share sheet failed or was dismissed.
    #[error("Native share failed{}: {message}", format_context(.context))]
    Share { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Clipboard unavailable{}: {message}", format_context(.context))]
    Clipboard { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal brochure error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
