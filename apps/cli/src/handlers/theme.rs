use crate::args::ThemeAction;
use anyhow::Result;
use otsav::Festival;

/// # Errors
/// Returns an error if the preference cannot be persisted.
pub(crate) fn handle(festival: &Festival, action: ThemeAction) -> Result<()> {
    let theme = festival.theme();

    match action {
        ThemeAction::Show { system_dark } => {
            println!("preference: {}", theme.preference());
            println!("applied:    {}", theme.resolved(system_dark));
        },
        ThemeAction::Toggle { system_dark } => {
            let applied = theme.toggle(system_dark)?;
            println!("🎨 Theme switched to {applied}");
        },
        ThemeAction::Set { preference } => {
            theme.set(preference)?;
            println!("🎨 Theme preference set to {preference}");
        },
    }

    Ok(())
}
