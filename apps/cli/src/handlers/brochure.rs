use crate::args::BrochureAction;
use crate::clipboard::TerminalClipboard;
use crate::handlers::print_notifications;
use anyhow::Result;
use otsav::Festival;
use otsav::domain::notification::Notification;
use otsav::features::brochure::ShareOutcome;

/// # Errors
/// Returns an error if the notification bus cannot be subscribed to.
pub(crate) fn handle(festival: &Festival, action: &BrochureAction) -> Result<()> {
    let brochure = festival.brochure();

    match action {
        BrochureAction::Download => {
            let link = brochure.download_link();
            println!("{}", brochure.title());
            println!("Download: {}", brochure.url());
            if let Some(name) = link.file_name {
                println!("Save as:  {name}");
            }
        },
        BrochureAction::View => {
            let link = brochure.view_link();
            println!("{}", brochure.title());
            println!("Open: {} (target={})", brochure.url(), link.target.unwrap_or("_self"));
        },
        BrochureAction::Share => {
            let mut notifications = festival.events().subscribe::<Notification>()?;
            let outcome = brochure.share(None, &TerminalClipboard, festival.events());
            print_notifications(&mut notifications);
            if matches!(outcome, ShareOutcome::Copied) {
                println!("{}", brochure.url());
            }
        },
    }

    Ok(())
}
