use std::borrow::Cow;

/// Errors raised by [`crate::EventBus`].
#[otsav_derive::otsav_error]
pub enum EventBusError {
    /// The registry holds a sender of an unexpected type for this event.
    #[error("Type mismatch{}: {message}", format_context(.context))]
    TypeMismatch { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Channel buffers must hold at least one event.
    #[error("Invalid capacity{}: {message}", format_context(.context))]
    InvalidCapacity { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
