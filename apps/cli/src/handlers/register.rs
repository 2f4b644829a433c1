use crate::args::RegisterArgs;
use crate::handlers::print_notifications;
use anyhow::{Result, bail};
use otsav::Festival;
use otsav::domain::notification::Notification;
use otsav::domain::registration::RegistrationDraft;
use otsav::features::registration::{FormState, SubmitOutcome};

impl From<RegisterArgs> for RegistrationDraft {
    fn from(args: RegisterArgs) -> Self {
        Self {
            full_name: args.full_name,
            email: args.email,
            phone: args.phone,
            college: args.college,
            event: args.event,
            team_size: args.team_size,
            message: args.message,
        }
    }
}

/// Fills the form from the arguments and submits it.
///
/// # Errors
/// Returns an error when any field is invalid or the submission fails.
pub(crate) async fn register(festival: &Festival, args: RegisterArgs) -> Result<()> {
    let json = args.json;
    let mut notifications = festival.events().subscribe::<Notification>()?;
    let form = festival.registration();

    form.fill(args.into())?;

    let mut state = form.subscribe_state();
    let submit = form.submit();
    tokio::pin!(submit);
    let outcome = loop {
        tokio::select! {
            outcome = &mut submit => break outcome,
            Ok(()) = state.changed() => {
                if *state.borrow_and_update() == FormState::Submitting {
                    println!("⏳ {}", FormState::Submitting.submit_label());
                }
            },
        }
    };
    print_notifications(&mut notifications);

    match outcome? {
        SubmitOutcome::Accepted(ack) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&ack)?);
            } else {
                println!("Receipt: {}", ack.receipt);
            }
            Ok(())
        },
        SubmitOutcome::Rejected(errors) => {
            for (field, message) in errors.iter() {
                eprintln!("  {}: {message}", field.label());
            }
            bail!("Registration rejected: {} field(s) need attention", errors.len())
        },
        SubmitOutcome::Ignored => bail!("A registration is already being submitted"),
    }
}
