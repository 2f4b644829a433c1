//! # CLI Argument Definitions

use clap::{Args, Parser, Subcommand};
use otsav::features::theme::ThemePreference;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "otsav")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Sandipotsav 2K26: events, registration, brochure and theme")]
pub(crate) struct Cli {
    /// Configuration file (defaults to `otsav.*` in the working directory, if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Show debug logs on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    /// List the events and team sizes open for registration
    Events {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Submit a registration
    Register(RegisterArgs),
    /// Get the sponsorship brochure
    Brochure {
        #[command(subcommand)]
        action: BrochureAction,
    },
    /// Show or change the colour theme
    Theme {
        #[command(subcommand)]
        action: ThemeAction,
    },
}

/// Form inputs. Every value is validated by the form, not by the argument parser,
/// so a missing field is reported with the same message the page shows.
#[derive(Debug, Args)]
pub(crate) struct RegisterArgs {
    #[arg(long, default_value = "")]
    pub full_name: String,
    #[arg(long, default_value = "")]
    pub email: String,
    #[arg(long, default_value = "")]
    pub phone: String,
    #[arg(long, default_value = "")]
    pub college: String,
    /// Event name exactly as listed by `otsav events`
    #[arg(long, default_value = "")]
    pub event: String,
    /// One of 1, 2, 3-4, 5+
    #[arg(long, default_value = "")]
    pub team_size: String,
    #[arg(long, default_value = "")]
    pub message: String,
    /// Print the acknowledgment as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Subcommand)]
pub(crate) enum BrochureAction {
    /// Print the download link
    Download,
    /// Print the link that opens the brochure in a new view
    View,
    /// Copy the brochure link to the terminal clipboard
    Share,
}

#[derive(Debug, Subcommand)]
pub(crate) enum ThemeAction {
    /// Print the stored preference and the applied theme
    Show {
        /// Treat the platform as being in dark mode
        #[arg(long)]
        system_dark: bool,
    },
    /// Switch to the opposite of the applied theme
    Toggle {
        #[arg(long)]
        system_dark: bool,
    },
    /// Store a preference: light, dark or system
    Set { preference: ThemePreference },
}
