use crate::sink::SubmissionError;
use std::borrow::Cow;

/// Errors of the registration slice.
#[otsav_derive::otsav_error]
pub enum RegistrationError {
    /// The sink failed; the form is back in editing with its values kept.
    #[error("Submission failed{}: {source}", format_context(.context))]
    Submission { source: SubmissionError, context: Option<Cow<'static, str>> },

    /// The form is locked while a submission is in flight.
    #[error("Form is busy{}: {message}", format_context(.context))]
    Busy { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal registration error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
