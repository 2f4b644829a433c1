pub(crate) mod brochure;
pub(crate) mod events;
pub(crate) mod register;
pub(crate) mod theme;

use otsav::domain::notification::{Notification, NotificationLevel};
use otsav::events::EventReceiverExt;
use std::sync::Arc;
use tokio::sync::broadcast;

/// Prints every notification already queued on `rx`.
pub(crate) fn print_notifications(rx: &mut broadcast::Receiver<Arc<Notification>>) {
    while let Some(notification) = rx.try_next_event() {
        let marker = match notification.level {
            NotificationLevel::Success => "✅",
            NotificationLevel::Info => "ℹ️",
            NotificationLevel::Error => "❌",
        };
        println!("{marker} {}", notification.message);
    }
}
