//! # Registration
//!
//! The registration slice of the festival site:
//!
//! * [`schema`] decides whether a filled-in form is acceptable and says why not.
//! * [`sink`] is where accepted registrations go; [`SimulatedSink`] stands in for a backend.
//! * [`controller`] runs the form lifecycle and publishes user-facing
//!   [`Notification`](otsav_domain::notification::Notification)s on the event bus.
//!
//! ## Example
//!
//! ```rust,no_run
//! use otsav_domain::registration::FormField;
//! use otsav_event_bus::EventBus;
//! use otsav_registration::{ControllerSettings, FormController, SimulatedSink, SubmitOutcome};
//!
//! # async fn run() -> Result<(), otsav_registration::RegistrationError> {
//! let form = FormController::new(SimulatedSink::default(), EventBus::new(), ControllerSettings::default());
//! form.set_field(FormField::FullName, "Asha Rao")?;
//! // ... remaining fields ...
//! match form.submit().await? {
//!     SubmitOutcome::Accepted(ack) => println!("receipt {}", ack.receipt),
//!     SubmitOutcome::Rejected(errors) => println!("{} fields need attention", errors.len()),
//!     SubmitOutcome::Ignored => {},
//! }
//! # Ok(())
//! # }
//! ```

pub mod controller;
mod error;
pub mod schema;
pub mod sink;

pub use crate::controller::{ControllerSettings, FormController, FormState, SubmitOutcome};
pub use crate::error::{RegistrationError, RegistrationErrorExt};
pub use crate::schema::{validate, validate_field};
pub use crate::sink::{
    Ack, SimulatedSink, SubmissionError, SubmissionErrorExt, SubmissionSink,
};
