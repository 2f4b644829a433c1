//! User-facing toasts raised by the form and the brochure widget.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use strum_macros::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    Success,
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: Cow<'static, str>,
}

impl Notification {
    pub fn success(message: impl Into<Cow<'static, str>>) -> Self {
        Self { level: NotificationLevel::Success, message: message.into() }
    }

    pub fn info(message: impl Into<Cow<'static, str>>) -> Self {
        Self { level: NotificationLevel::Info, message: message.into() }
    }

    pub fn error(message: impl Into<Cow<'static, str>>) -> Self {
        Self { level: NotificationLevel::Error, message: message.into() }
    }
}
