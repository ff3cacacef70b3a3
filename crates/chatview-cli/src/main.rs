//! chatview - CLI viewer for exported WhatsApp chat transcripts

mod cli;
mod commands;
mod output;
mod source;

use anyhow::Result;
use clap::Parser;
use chatview_store::ChatStore;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    // Piped output gets plain text
    if !atty::is(atty::Stream::Stdout) {
        colored::control::set_override(false);
    }

    let cli = Cli::parse();

    let store = match &cli.store_path {
        Some(path) => ChatStore::open_or_create(path),
        None => ChatStore::open_or_create_default(),
    }?;

    match &cli.command {
        Command::Import { file } => commands::import::run(&cli, &store, file),

        Command::View {
            date,
            sender,
            search,
            last,
            first,
            swap,
        } => commands::view::run(
            &cli,
            &store,
            *date,
            sender.as_deref(),
            search.as_deref(),
            *last,
            *first,
            *swap,
        ),

        Command::Search { query, limit, date } => {
            commands::search::run(&cli, &store, query, *limit, *date)
        }

        Command::Info => commands::info::run(&cli, &store),

        Command::Export { output, pretty } => {
            commands::export::run(&cli, &store, output.as_deref(), *pretty)
        }
    }
}
