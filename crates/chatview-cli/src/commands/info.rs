//! Info command - conversation and store statistics

use anyhow::Result;
use chatview_core::ChatStats;
use chatview_store::ChatStore;

use crate::cli::{Cli, OutputFormat};
use crate::output::{human, json};
use crate::source;

pub fn run(cli: &Cli, store: &ChatStore) -> Result<()> {
    let messages = source::load_messages(store, cli.fallback_url.as_deref())?;
    if messages.is_empty() {
        super::print_empty_state();
        return Ok(());
    }

    let stats = ChatStats::collect(&messages);
    let store_stats = store.stats()?;

    match cli.format {
        OutputFormat::Json => println!("{}", json::format_stats(&stats, &store_stats)),
        _ => println!("{}", human::format_stats(&stats, &store_stats)),
    }

    Ok(())
}
