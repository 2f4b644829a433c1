//! Where validated registrations go.

use otsav_domain::config::RegistrationConfig;
use otsav_domain::registration::RegistrationRequest;
use serde::Serialize;
use std::borrow::Cow;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

const DEFAULT_LATENCY: Duration = Duration::from_millis(1500);

/// Failures a submission sink may report.
///
/// The simulated sink never fails; these categories exist for real backends.
#[otsav_derive::otsav_error]
#[derive(Clone, PartialEq, Eq)]
pub enum SubmissionError {
    /// The backend refused the registration.
    #[error("Registration rejected{}: {message}", format_context(.context))]
    Rejected { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The backend could not be reached.
    #[error("Transport failure{}: {message}", format_context(.context))]
    Transport { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// No answer within the configured limit.
    #[error("Submission timed out{}: {message}", format_context(.context))]
    Timeout { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal submission error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

/// Acknowledgment for an accepted registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ack {
    pub receipt: String,
    pub request: RegistrationRequest,
}

/// Accepts validated registrations.
///
/// Implementations own their transport; the form controller only sees the outcome.
pub trait SubmissionSink: Send + Sync + 'static {
    fn submit(
        &self,
        request: RegistrationRequest,
    ) -> impl Future<Output = Result<Ack, SubmissionError>> + Send;
}

impl<S: SubmissionSink> SubmissionSink for Arc<S> {
    fn submit(
        &self,
        request: RegistrationRequest,
    ) -> impl Future<Output = Result<Ack, SubmissionError>> + Send {
        (**self).submit(request)
    }
}

/// Stand-in backend: waits a fixed latency, then always accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatedSink {
    latency: Duration,
}

impl SimulatedSink {
    #[must_use]
    pub const fn new(latency: Duration) -> Self {
        Self { latency }
    }

    #[must_use]
    pub const fn from_config(config: &RegistrationConfig) -> Self {
        Self::new(config.submit_delay())
    }
}

impl Default for SimulatedSink {
    fn default() -> Self {
        Self::new(DEFAULT_LATENCY)
    }
}

impl SubmissionSink for SimulatedSink {
    async fn submit(&self, request: RegistrationRequest) -> Result<Ack, SubmissionError> {
        debug!(latency_ms = self.latency.as_millis(), "Simulating submission");
        tokio::time::sleep(self.latency).await;

        let ack = Ack { receipt: otsav_kernel::receipt_id(), request };
        info!(
            receipt = %ack.receipt,
            event = %ack.request.event,
            team_size = %ack.request.team_size,
            "Form submitted"
        );
        Ok(ack)
    }
}
