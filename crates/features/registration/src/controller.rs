//! # Form Controller
//!
//! Drives one registration form through `Editing -> Submitting -> Submitted -> Editing`.
//!
//! The controller is a cheap cloneable handle. Every transition happens under a single
//! lock, so the "can submit" check and the move to `Submitting` are one step; the lock is
//! released before the sink is awaited. Delivery runs on its own task, which means a
//! submission that has started always runs to completion even if the caller goes away.

use crate::error::RegistrationError;
use crate::schema::{self, FieldMessage};
use crate::sink::{Ack, SubmissionError, SubmissionSink};
use otsav_domain::config::RegistrationConfig;
use otsav_domain::constants::REGISTRATION_SUCCESS_MESSAGE;
use otsav_domain::notification::Notification;
use otsav_domain::registration::{FieldErrors, FormField, RegistrationDraft, RegistrationRequest};
use otsav_event_bus::EventBus;
use parking_lot::Mutex;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use strum_macros::Display;
use tokio::sync::watch;
use tracing::{debug, info, warn};

const DEFAULT_RESET_DELAY: Duration = Duration::from_millis(3000);
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
const SUBMISSION_FAILED_MESSAGE: &str = "Registration failed. Please try again.";

/// Lifecycle of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FormState {
    #[default]
    Editing,
    Submitting,
    Submitted,
}

impl FormState {
    /// Label of the submit button in this state.
    #[must_use]
    pub const fn submit_label(self) -> &'static str {
        match self {
            Self::Editing => "Submit Registration",
            Self::Submitting => "Submitting...",
            Self::Submitted => "Registration Successful!",
        }
    }

    #[must_use]
    pub const fn accepts_submit(self) -> bool {
        matches!(self, Self::Editing)
    }
}

/// Result of a submit trigger that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The sink accepted the registration; the form is now `Submitted`.
    Accepted(Ack),
    /// Validation failed; the sink was not called.
    Rejected(FieldErrors),
    /// The form was not in `Editing`; nothing happened.
    Ignored,
}

/// Timing knobs of the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControllerSettings {
    /// How long `Submitted` lasts before the form returns to `Editing`.
    pub reset_delay: Duration,
    /// Upper bound on a sink call; `None` waits forever.
    pub timeout: Option<Duration>,
}

impl Default for ControllerSettings {
    fn default() -> Self {
        Self { reset_delay: DEFAULT_RESET_DELAY, timeout: Some(DEFAULT_TIMEOUT) }
    }
}

impl From<&RegistrationConfig> for ControllerSettings {
    fn from(config: &RegistrationConfig) -> Self {
        Self { reset_delay: config.reset_delay(), timeout: config.timeout() }
    }
}

#[derive(Default)]
struct FormData {
    state: FormState,
    draft: RegistrationDraft,
    errors: FieldErrors,
}

struct Shared<S> {
    sink: S,
    events: EventBus,
    settings: ControllerSettings,
    form: Mutex<FormData>,
    state: watch::Sender<FormState>,
}

impl<S> Shared<S> {
    fn transition(&self, form: &mut FormData, next: FormState) {
        debug!(from = %form.state, to = %next, "Form state change");
        form.state = next;
        self.state.send_replace(next);
    }

    fn notify(&self, notification: Notification) {
        if let Err(e) = self.events.publish(notification) {
            warn!(error = %e, "Failed to publish notification");
        }
    }
}

/// Handle to a registration form.
pub struct FormController<S> {
    shared: Arc<Shared<S>>,
}

impl<S> Clone for FormController<S> {
    fn clone(&self) -> Self {
        Self { shared: Arc::clone(&self.shared) }
    }
}

impl<S> fmt::Debug for FormController<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormController")
            .field("state", &*self.shared.state.borrow())
            .field("settings", &self.shared.settings)
            .finish_non_exhaustive()
    }
}

impl<S: SubmissionSink> FormController<S> {
    pub fn new(sink: S, events: EventBus, settings: ControllerSettings) -> Self {
        let (state, _) = watch::channel(FormState::Editing);
        Self {
            shared: Arc::new(Shared {
                sink,
                events,
                settings,
                form: Mutex::new(FormData::default()),
                state,
            }),
        }
    }

    pub fn from_config(sink: S, events: EventBus, config: &RegistrationConfig) -> Self {
        Self::new(sink, events, ControllerSettings::from(config))
    }

    #[must_use]
    pub fn state(&self) -> FormState {
        *self.shared.state.borrow()
    }

    /// Watches state changes; the receiver starts at the current state.
    #[must_use]
    pub fn subscribe_state(&self) -> watch::Receiver<FormState> {
        self.shared.state.subscribe()
    }

    /// `false` while a submission is in flight or just succeeded.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.state().accepts_submit()
    }

    #[must_use]
    pub fn submit_label(&self) -> &'static str {
        self.state().submit_label()
    }

    #[must_use]
    pub fn settings(&self) -> ControllerSettings {
        self.shared.settings
    }

    #[must_use]
    pub fn events(&self) -> &EventBus {
        &self.shared.events
    }

    #[must_use]
    pub fn draft(&self) -> RegistrationDraft {
        self.shared.form.lock().draft.clone()
    }

    #[must_use]
    pub fn errors(&self) -> FieldErrors {
        self.shared.form.lock().errors.clone()
    }

    #[must_use]
    pub fn error_for(&self, field: FormField) -> Option<String> {
        self.shared.form.lock().errors.get(field).map(str::to_owned)
    }

    /// Updates one input and clears its stale error.
    ///
    /// # Errors
    /// Returns [`RegistrationError::Busy`] while a submission is in flight.
    pub fn set_field(
        &self,
        field: FormField,
        value: impl Into<String>,
    ) -> Result<(), RegistrationError> {
        let mut form = self.shared.form.lock();
        ensure_editable(form.state, field.label())?;
        form.draft.set(field, value);
        form.errors.remove(field);
        Ok(())
    }

    /// Replaces every input at once, dropping all errors.
    ///
    /// # Errors
    /// Returns [`RegistrationError::Busy`] while a submission is in flight.
    pub fn fill(&self, draft: RegistrationDraft) -> Result<(), RegistrationError> {
        let mut form = self.shared.form.lock();
        ensure_editable(form.state, "The form")?;
        form.draft = draft;
        form.errors.clear();
        Ok(())
    }

    /// Re-checks one input and records or clears its error.
    ///
    /// # Errors
    /// Returns the field message when the current value is invalid.
    pub fn validate_field(&self, field: FormField) -> Result<(), FieldMessage> {
        let mut form = self.shared.form.lock();
        let verdict = schema::validate_field(field, form.draft.get(field));
        match &verdict {
            Ok(()) => {
                form.errors.remove(field);
            },
            Err(message) => form.errors.insert(field, message.clone()),
        }
        verdict
    }

    /// Validates the draft and, if it passes, hands it to the sink.
    ///
    /// # Errors
    /// * [`RegistrationError::Submission`] when the sink fails or times out; the form is
    ///   back in `Editing` with its values kept.
    /// * [`RegistrationError::Internal`] if the delivery task panicked.
    pub async fn submit(&self) -> Result<SubmitOutcome, RegistrationError> {
        let request = {
            let mut form = self.shared.form.lock();
            if !form.state.accepts_submit() {
                debug!(state = %form.state, "Submit ignored");
                return Ok(SubmitOutcome::Ignored);
            }

            match schema::validate(&form.draft) {
                Err(errors) => {
                    debug!(invalid = errors.len(), "Registration failed validation");
                    form.errors = errors.clone();
                    return Ok(SubmitOutcome::Rejected(errors));
                },
                Ok(request) => {
                    form.errors.clear();
                    self.shared.transition(&mut form, FormState::Submitting);
                    request
                },
            }
        };

        let this = self.clone();
        tokio::spawn(async move { this.complete(request).await }).await.map_err(|e| {
            RegistrationError::Internal {
                message: e.to_string().into(),
                context: Some("Registration delivery task".into()),
            }
        })?
    }

    async fn complete(
        &self,
        request: RegistrationRequest,
    ) -> Result<SubmitOutcome, RegistrationError> {
        let result = self.deliver(request).await;

        let mut form = self.shared.form.lock();
        match result {
            Ok(ack) => {
                form.draft.clear();
                form.errors.clear();
                self.shared.transition(&mut form, FormState::Submitted);
                drop(form);

                info!(receipt = %ack.receipt, "Registration accepted");
                self.shared.notify(Notification::success(REGISTRATION_SUCCESS_MESSAGE));
                self.schedule_reset();
                Ok(SubmitOutcome::Accepted(ack))
            },
            Err(source) => {
                self.shared.transition(&mut form, FormState::Editing);
                drop(form);

                warn!(error = %source, "Registration submission failed");
                self.shared.notify(Notification::error(SUBMISSION_FAILED_MESSAGE));
                Err(RegistrationError::Submission {
                    source,
                    context: Some("Submitting registration".into()),
                })
            },
        }
    }

    async fn deliver(&self, request: RegistrationRequest) -> Result<Ack, SubmissionError> {
        let submission = self.shared.sink.submit(request);
        match self.shared.settings.timeout {
            None => submission.await,
            Some(limit) => tokio::time::timeout(limit, submission).await.map_err(|_| {
                SubmissionError::Timeout {
                    message: format!("no response within {} ms", limit.as_millis()).into(),
                    context: None,
                }
            })?,
        }
    }

    fn schedule_reset(&self) {
        let shared = Arc::clone(&self.shared);
        tokio::spawn(async move {
            tokio::time::sleep(shared.settings.reset_delay).await;
            let mut form = shared.form.lock();
            if form.state == FormState::Submitted {
                shared.transition(&mut form, FormState::Editing);
            }
        });
    }
}

fn ensure_editable(state: FormState, what: &str) -> Result<(), RegistrationError> {
    if state == FormState::Submitting {
        return Err(RegistrationError::Busy {
            message: format!("{what} cannot be edited while submitting").into(),
            context: None,
        });
    }
    Ok(())
}
