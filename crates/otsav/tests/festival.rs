use otsav::domain::config::SiteConfig;
use otsav::domain::notification::{Notification, NotificationLevel};
use otsav::domain::registration::{FormField, RegistrationDraft};
use otsav::events::EventReceiverExt;
use otsav::features::brochure::{MemoryClipboard, ShareOutcome};
use otsav::features::registration::SubmitOutcome;
use otsav::features::theme::{Theme, ThemePreference};
use otsav::{Festival, FestivalError};

fn config(dir: &std::path::Path) -> SiteConfig {
    let mut config = SiteConfig::default();
    config.site.origin = "https://sandipotsav.example".into();
    config.registration.submit_delay_ms = 10;
    config.theme.store_path = dir.join("theme.json");
    config
}

#[test]
fn slices_follow_the_configuration() {
    let dir = tempfile::tempdir().unwrap();
    let festival = Festival::init(config(dir.path())).unwrap();

    assert_eq!(festival.brochure().url().as_str(), "https://sandipotsav.example/SandipOtsav.pdf");
    assert_eq!(festival.theme().preference(), ThemePreference::System);
    assert_eq!(festival.registration().settings().reset_delay.as_millis(), 3000);
}

#[test]
fn bad_origin_is_reported_as_brochure_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = config(dir.path());
    config.site.origin = "ftp://files.example".into();

    let err = Festival::init(config).unwrap_err();
    assert!(matches!(err, FestivalError::Brochure { .. }));
}

#[test]
fn unknown_theme_default_is_reported_as_theme_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = config(dir.path());
    config.theme.default = "neon".into();

    let err = Festival::init(config).unwrap_err();
    assert!(matches!(err, FestivalError::Theme { .. }));
}

#[tokio::test(start_paused = true)]
async fn slices_share_one_notification_bus() {
    let dir = tempfile::tempdir().unwrap();
    let festival = Festival::init(config(dir.path())).unwrap();
    let mut notifications = festival.events().subscribe::<Notification>().unwrap();

    let outcome = festival.brochure().share(None, &MemoryClipboard::new(), festival.events());
    assert_eq!(outcome, ShareOutcome::Copied);

    let form = festival.registration();
    form.fill(
        RegistrationDraft::default()
            .with(FormField::FullName, "Asha Rao")
            .with(FormField::Email, "asha@example.com")
            .with(FormField::Phone, "9876543210")
            .with(FormField::College, "XYZ College")
            .with(FormField::Event, "Quiz Competition")
            .with(FormField::TeamSize, "2"),
    )
    .unwrap();
    assert!(matches!(form.submit().await.unwrap(), SubmitOutcome::Accepted(_)));

    let first = notifications.next_event().await.unwrap();
    let second = notifications.next_event().await.unwrap();
    assert_eq!(first.message, "PDF link copied!");
    assert_eq!(second.level, NotificationLevel::Success);
}

#[test]
fn theme_toggle_is_persisted_between_sessions() {
    let dir = tempfile::tempdir().unwrap();
    {
        let festival = Festival::init(config(dir.path())).unwrap();
        assert_eq!(festival.theme().toggle(true).unwrap(), Theme::Light);
    }
    let festival = Festival::init(config(dir.path())).unwrap();
    assert_eq!(festival.theme().preference(), ThemePreference::Light);
}
