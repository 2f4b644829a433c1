#![allow(clippy::print_stderr, clippy::print_stdout)]

mod args;
mod clipboard;
mod handlers;

use crate::args::{Cli, Commands};
use crate::handlers::{brochure, events, register, theme};
use anyhow::{Context, Result};
use clap::Parser;
use otsav::Festival;
use otsav_logger::{LevelFilter, Logger};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let _log = Logger::builder(env!("CARGO_PKG_NAME"))
        .level(if cli.verbose { LevelFilter::DEBUG } else { LevelFilter::WARN })
        .init()?;

    let config = cli.config.as_deref();
    let festival = || Festival::load(config).context("Loading site configuration");

    match cli.command {
        Commands::Events { json } => events::list_events(json)?,
        Commands::Register(args) => register::register(&festival()?, args).await?,
        Commands::Brochure { action } => brochure::handle(&festival()?, &action)?,
        Commands::Theme { action } => theme::handle(&festival()?, action)?,
    }

    Ok(())
}
