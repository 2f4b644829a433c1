use otsav_domain::catalog::{FestivalEvent, TeamSize};
use otsav_domain::registration::{FormField, RegistrationDraft};
use otsav_registration::{validate, validate_field};
use proptest::prelude::*;

fn asha() -> RegistrationDraft {
    RegistrationDraft::default()
        .with(FormField::FullName, "Asha Rao")
        .with(FormField::Email, "asha@example.com")
        .with(FormField::Phone, "9876543210")
        .with(FormField::College, "XYZ College")
        .with(FormField::Event, "Quiz Competition")
        .with(FormField::TeamSize, "2")
}

#[test]
fn complete_form_is_accepted_with_typed_values() {
    let request = validate(&asha()).unwrap();
    assert_eq!(request.full_name, "Asha Rao");
    assert_eq!(request.email, "asha@example.com");
    assert_eq!(request.phone, "9876543210");
    assert_eq!(request.college, "XYZ College");
    assert_eq!(request.event, FestivalEvent::QuizCompetition);
    assert_eq!(request.team_size, TeamSize::Duo);
    assert_eq!(request.message, None);
}

#[test]
fn invalid_email_is_the_only_complaint() {
    let errors = validate(&asha().with(FormField::Email, "not-an-email")).unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.get(FormField::Email), Some("Please enter a valid email"));
}

#[test]
fn malformed_addresses_are_rejected() {
    for address in ["a@b", "user@localhost", "x@example.c", "a!b@example.com", "user.@example.com"] {
        assert_eq!(
            validate_field(FormField::Email, address).unwrap_err(),
            "Please enter a valid email",
            "{address}"
        );
    }
}

#[test]
fn short_phone_is_the_only_complaint() {
    let errors = validate(&asha().with(FormField::Phone, "123")).unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.get(FormField::Phone), Some("Phone number must be at least 10 digits"));
}

#[test]
fn empty_form_reports_every_required_field() {
    let errors = validate(&RegistrationDraft::default()).unwrap_err();
    let fields: Vec<_> = errors.fields().collect();
    assert_eq!(
        fields,
        vec![
            FormField::FullName,
            FormField::Email,
            FormField::Phone,
            FormField::College,
            FormField::Event,
            FormField::TeamSize,
        ]
    );
    assert_eq!(errors.get(FormField::College), Some("College name is required"));
    assert_eq!(errors.get(FormField::Event), Some("Please select an event"));
    assert_eq!(errors.get(FormField::TeamSize), Some("Please select team size"));
}

#[test]
fn every_catalog_event_is_accepted() {
    for event in FestivalEvent::all() {
        let request = validate(&asha().with(FormField::Event, event.name())).unwrap();
        assert_eq!(request.event, event);
    }
}

#[test]
fn unknown_events_are_rejected() {
    for raw in ["Hackathon", "quiz competition", "Dance Competition", "Quiz Competition!"] {
        let errors = validate(&asha().with(FormField::Event, raw)).unwrap_err();
        assert_eq!(errors.get(FormField::Event), Some("Please select a valid event"), "{raw}");
    }
}

#[test]
fn team_sizes_are_a_closed_set() {
    for size in TeamSize::all() {
        assert!(validate(&asha().with(FormField::TeamSize, size.value())).is_ok());
    }
    for raw in ["0", "3", "4", "5", "6", "five", "3 - 4"] {
        assert!(validate_field(FormField::TeamSize, raw).is_err(), "{raw}");
    }
}

#[test]
fn message_is_optional_and_bounded() {
    let blank = validate(&asha().with(FormField::Message, "   ")).unwrap();
    assert_eq!(blank.message, None);

    let note = validate(&asha().with(FormField::Message, "  We are a band of four.  ")).unwrap();
    assert_eq!(note.message.as_deref(), Some("We are a band of four."));

    let errors = validate(&asha().with(FormField::Message, "x".repeat(501))).unwrap_err();
    assert_eq!(errors.get(FormField::Message), Some("Message must be at most 500 characters"));
}

fn draft(name: &str, email: &str, phone: &str, college: &str) -> RegistrationDraft {
    asha()
        .with(FormField::FullName, name)
        .with(FormField::Email, email)
        .with(FormField::Phone, phone)
        .with(FormField::College, college)
}

proptest! {
    #[test]
    fn valid_input_round_trips_trimmed(
        name in "[A-Za-z][A-Za-z .']{0,98}[A-Za-z]",
        email in "[a-z]{1,12}@[a-z]{1,12}\\.(com|org|edu|in)",
        phone in "[0-9]{10,15}",
        college in "[A-Za-z][A-Za-z ]{0,198}[A-Za-z]",
        event in prop::sample::select(FestivalEvent::all().collect::<Vec<_>>()),
        team in prop::sample::select(TeamSize::all().collect::<Vec<_>>()),
        pad in "[ \t]{0,3}",
    ) {
        let raw = draft(
            &format!("{pad}{name}{pad}"),
            &format!("{pad}{email}"),
            &format!("{phone}{pad}"),
            &format!("{pad}{college}{pad}"),
        )
        .with(FormField::Event, event.name())
        .with(FormField::TeamSize, team.value());

        let request = validate(&raw).unwrap();
        prop_assert_eq!(request.full_name, name);
        prop_assert_eq!(request.email, email);
        prop_assert_eq!(request.phone, phone);
        prop_assert_eq!(request.college, college);
        prop_assert_eq!(request.event, event);
        prop_assert_eq!(request.team_size, team);
    }

    #[test]
    fn bad_name_length_only_flags_the_name(
        name in prop_oneof!["[A-Za-z]?", "[A-Za-z]{101,160}"],
    ) {
        let errors = validate(&asha().with(FormField::FullName, name)).unwrap_err();
        prop_assert_eq!(errors.len(), 1);
        prop_assert!(errors.contains(FormField::FullName));
    }

    #[test]
    fn field_checks_are_independent(
        bad_phone in "[0-9]{0,9}",
        bad_college in "[A-Za-z]?",
    ) {
        let errors = validate(
            &asha().with(FormField::Phone, bad_phone).with(FormField::College, bad_college),
        )
        .unwrap_err();
        prop_assert_eq!(errors.len(), 2);
        prop_assert!(errors.contains(FormField::Phone));
        prop_assert!(errors.contains(FormField::College));
    }
}
