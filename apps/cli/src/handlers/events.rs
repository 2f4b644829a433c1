use anyhow::Result;
use otsav::domain::catalog::{FestivalEvent, TeamSize};
use otsav::domain::constants::FESTIVAL_NAME;

/// Prints the event catalog and the accepted team sizes.
///
/// # Errors
/// Returns an error if JSON encoding fails.
pub(crate) fn list_events(json: bool) -> Result<()> {
    if json {
        let events: Vec<_> = FestivalEvent::all().collect();
        let sizes: Vec<_> = TeamSize::all().collect();
        println!("{}", serde_json::json!({ "events": events, "teamSizes": sizes }));
        return Ok(());
    }

    println!("\n{FESTIVAL_NAME} events:\n");
    for (number, event) in FestivalEvent::all().enumerate() {
        println!("{:>3}. {}", number + 1, event.name());
    }

    println!("\nTeam sizes:\n");
    for size in TeamSize::all() {
        println!("{:<6} {}", size.value(), size.label());
    }
    println!();

    Ok(())
}
