use crate::bus::Event;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::warn;

/// Lag-tolerant receiving for bus subscriptions.
pub trait EventReceiverExt<T> {
    /// Waits for the next event, skipping over anything lost to lag.
    ///
    /// Returns `None` once the channel is closed.
    fn next_event(&mut self) -> impl Future<Output = Option<Arc<T>>> + Send;

    /// Returns an already-buffered event without waiting.
    fn try_next_event(&mut self) -> Option<Arc<T>>;
}

impl<T: Event> EventReceiverExt<T> for broadcast::Receiver<Arc<T>> {
    async fn next_event(&mut self) -> Option<Arc<T>> {
        loop {
            match self.recv().await {
                Ok(event) => return Some(event),
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    warn!(event = std::any::type_name::<T>(), skipped, "Subscriber lagged");
                },
                Err(broadcast::error::RecvError::Closed) => return None,
            }
        }
    }

    fn try_next_event(&mut self) -> Option<Arc<T>> {
        loop {
            match self.try_recv() {
                Ok(event) => return Some(event),
                Err(broadcast::error::TryRecvError::Lagged(skipped)) => {
                    warn!(event = std::any::type_name::<T>(), skipped, "Subscriber lagged");
                },
                Err(
                    broadcast::error::TryRecvError::Empty | broadcast::error::TryRecvError::Closed,
                ) => return None,
            }
        }
    }
}
