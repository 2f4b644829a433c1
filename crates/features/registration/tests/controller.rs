use otsav_domain::constants::REGISTRATION_SUCCESS_MESSAGE;
use otsav_domain::notification::{Notification, NotificationLevel};
use otsav_domain::registration::{FormField, RegistrationDraft, RegistrationRequest};
use otsav_event_bus::{EventBus, EventReceiverExt};
use otsav_registration::{
    Ack, ControllerSettings, FormController, FormState, RegistrationError, SimulatedSink,
    SubmissionError, SubmissionSink, SubmitOutcome,
};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio::time::Instant;

fn asha() -> RegistrationDraft {
    RegistrationDraft::default()
        .with(FormField::FullName, "Asha Rao")
        .with(FormField::Email, "asha@example.com")
        .with(FormField::Phone, "9876543210")
        .with(FormField::College, "XYZ College")
        .with(FormField::Event, "Quiz Competition")
        .with(FormField::TeamSize, "2")
}

/// Counts calls and answers the way it was told to after `delay`.
#[derive(Debug)]
struct ScriptedSink {
    calls: AtomicUsize,
    delay: Duration,
    failure: Option<SubmissionError>,
}

impl ScriptedSink {
    fn succeeding(delay: Duration) -> Arc<Self> {
        Arc::new(Self { calls: AtomicUsize::new(0), delay, failure: None })
    }

    fn failing(failure: SubmissionError) -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            delay: Duration::from_millis(100),
            failure: Some(failure),
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl SubmissionSink for ScriptedSink {
    async fn submit(&self, request: RegistrationRequest) -> Result<Ack, SubmissionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(self.delay).await;
        match &self.failure {
            Some(failure) => Err(failure.clone()),
            None => Ok(Ack { receipt: "REG-TEST".into(), request }),
        }
    }
}

#[tokio::test(start_paused = true)]
async fn accepted_registration_runs_the_full_cycle() {
    let bus = EventBus::new();
    let mut notifications = bus.subscribe::<Notification>().unwrap();
    let form = FormController::new(SimulatedSink::default(), bus, ControllerSettings::default());
    let mut states = form.subscribe_state();
    form.fill(asha()).unwrap();
    assert_eq!(form.submit_label(), "Submit Registration");

    let submitter = tokio::spawn({
        let form = form.clone();
        async move { form.submit().await }
    });

    states.changed().await.unwrap();
    assert_eq!(*states.borrow_and_update(), FormState::Submitting);
    assert!(!form.can_submit());
    assert_eq!(form.submit_label(), "Submitting...");

    let SubmitOutcome::Accepted(ack) = submitter.await.unwrap().unwrap() else {
        panic!("expected the registration to be accepted");
    };
    assert!(ack.receipt.starts_with("REG-"));
    assert_eq!(ack.request.full_name, "Asha Rao");

    assert_eq!(form.state(), FormState::Submitted);
    assert_eq!(form.submit_label(), "Registration Successful!");
    assert!(form.draft().is_blank());
    assert!(form.errors().is_empty());

    let toast = notifications.next_event().await.unwrap();
    assert_eq!(toast.level, NotificationLevel::Success);
    assert_eq!(toast.message, REGISTRATION_SUCCESS_MESSAGE);

    let submitted_at = Instant::now();
    states.wait_for(|state| *state == FormState::Editing).await.unwrap();
    assert!(submitted_at.elapsed() >= Duration::from_millis(3000));
    assert!(form.can_submit());
}

#[tokio::test(start_paused = true)]
async fn invalid_email_never_reaches_the_sink() {
    let bus = EventBus::new();
    let mut notifications = bus.subscribe::<Notification>().unwrap();
    let sink = ScriptedSink::succeeding(Duration::from_millis(10));
    let form = FormController::new(Arc::clone(&sink), bus, ControllerSettings::default());
    form.fill(asha().with(FormField::Email, "not-an-email")).unwrap();

    let SubmitOutcome::Rejected(errors) = form.submit().await.unwrap() else {
        panic!("expected a validation rejection");
    };
    assert_eq!(errors.get(FormField::Email), Some("Please enter a valid email"));
    assert_eq!(form.error_for(FormField::Email).as_deref(), Some("Please enter a valid email"));
    assert_eq!(form.state(), FormState::Editing);
    assert_eq!(sink.calls(), 0);
    assert!(notifications.try_next_event().is_none());
}

#[tokio::test(start_paused = true)]
async fn rapid_double_submit_sends_once() {
    let sink = ScriptedSink::succeeding(Duration::from_millis(1500));
    let form =
        FormController::new(Arc::clone(&sink), EventBus::new(), ControllerSettings::default());
    form.fill(asha()).unwrap();

    let (first, second) = tokio::join!(form.submit(), form.submit());

    assert!(matches!(first.unwrap(), SubmitOutcome::Accepted(_)));
    assert_eq!(second.unwrap(), SubmitOutcome::Ignored);
    assert_eq!(sink.calls(), 1);
}

#[tokio::test(start_paused = true)]
async fn submit_during_success_banner_is_ignored() {
    let sink = ScriptedSink::succeeding(Duration::from_millis(10));
    let form =
        FormController::new(Arc::clone(&sink), EventBus::new(), ControllerSettings::default());
    form.fill(asha()).unwrap();
    form.submit().await.unwrap();

    form.fill(asha()).unwrap();
    assert_eq!(form.submit().await.unwrap(), SubmitOutcome::Ignored);
    assert_eq!(sink.calls(), 1);

    // Edits made while the banner shows belong to the next entry.
    form.subscribe_state().wait_for(|state| *state == FormState::Editing).await.unwrap();
    assert_eq!(form.draft(), asha());
}

#[tokio::test(start_paused = true)]
async fn sink_failure_keeps_the_values() {
    let bus = EventBus::new();
    let mut notifications = bus.subscribe::<Notification>().unwrap();
    let sink = ScriptedSink::failing(SubmissionError::Transport {
        message: "connection refused".into(),
        context: None,
    });
    let form = FormController::new(Arc::clone(&sink), bus, ControllerSettings::default());
    form.fill(asha()).unwrap();

    let err = form.submit().await.unwrap_err();
    assert!(matches!(
        err,
        RegistrationError::Submission { source: SubmissionError::Transport { .. }, .. }
    ));
    assert_eq!(form.state(), FormState::Editing);
    assert_eq!(form.draft(), asha());
    assert_eq!(notifications.next_event().await.unwrap().level, NotificationLevel::Error);
    assert_eq!(sink.calls(), 1);
}

#[tokio::test(start_paused = true)]
async fn slow_sink_times_out() {
    let sink = ScriptedSink::succeeding(Duration::from_secs(60));
    let settings =
        ControllerSettings { timeout: Some(Duration::from_secs(10)), ..Default::default() };
    let form = FormController::new(sink, EventBus::new(), settings);
    form.fill(asha()).unwrap();

    let started = Instant::now();
    let err = form.submit().await.unwrap_err();
    assert!(matches!(
        err,
        RegistrationError::Submission { source: SubmissionError::Timeout { .. }, .. }
    ));
    assert!(started.elapsed() < Duration::from_secs(11));
    assert!(form.can_submit());
}

#[tokio::test(start_paused = true)]
async fn edits_are_refused_while_submitting() {
    let form = FormController::new(
        SimulatedSink::new(Duration::from_millis(500)),
        EventBus::new(),
        ControllerSettings::default(),
    );
    let mut states = form.subscribe_state();
    form.fill(asha()).unwrap();

    let submitter = tokio::spawn({
        let form = form.clone();
        async move { form.submit().await }
    });
    states.wait_for(|state| *state == FormState::Submitting).await.unwrap();

    let err = form.set_field(FormField::FullName, "Someone Else").unwrap_err();
    assert!(matches!(err, RegistrationError::Busy { .. }));

    let SubmitOutcome::Accepted(ack) = submitter.await.unwrap().unwrap() else {
        panic!("expected the registration to be accepted");
    };
    assert_eq!(ack.request.full_name, "Asha Rao");
}

#[tokio::test]
async fn editing_a_field_clears_its_error() {
    let form =
        FormController::new(SimulatedSink::default(), EventBus::new(), ControllerSettings::default());
    form.set_field(FormField::FullName, "A").unwrap();

    assert!(form.validate_field(FormField::FullName).is_err());
    assert!(form.error_for(FormField::FullName).is_some());

    form.set_field(FormField::FullName, "Asha").unwrap();
    assert!(form.error_for(FormField::FullName).is_none());
    assert!(form.validate_field(FormField::FullName).is_ok());
}
