//! # Event Bus
//!
//! A small typed publish/subscribe hub shared by the feature slices.
//!
//! Events are routed by their Rust type; each type gets its own
//! `tokio::sync::broadcast` channel, created lazily on first use. The form controller
//! and the brochure widget publish user-facing notifications here, and front-ends
//! subscribe to render them.
//!
//! # Example
//!
//! ```rust
//! use otsav_event_bus::{EventBus, EventBusError, EventReceiverExt};
//!
//! #[derive(Debug, PartialEq)]
//! struct Toast(&'static str);
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), EventBusError> {
//!     let bus = EventBus::new();
//!     let mut rx = bus.subscribe::<Toast>()?;
//!     bus.publish(Toast("PDF link copied!"))?;
//!
//!     assert_eq!(rx.next_event().await.as_deref(), Some(&Toast("PDF link copied!")));
//!     Ok(())
//! }
//! ```

mod bus;
mod error;
mod receiver;

pub use bus::{Event, EventBus};
pub use error::{EventBusError, EventBusErrorExt};
pub use receiver::EventReceiverExt;
