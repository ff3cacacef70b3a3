//! Search command - case-insensitive text search over the conversation

use anyhow::Result;
use chatview_core::{filter_messages, search_positions, FilterOptions, MatchCursor};
use chatview_store::ChatStore;
use chrono::NaiveDate;
use colored::Colorize;

use crate::cli::{Cli, OutputFormat};
use crate::output::{colors, human, json, minimal};
use crate::source;

pub fn run(
    cli: &Cli,
    store: &ChatStore,
    query: &str,
    limit: usize,
    date: Option<NaiveDate>,
) -> Result<()> {
    let messages = source::load_messages(store, cli.fallback_url.as_deref())?;
    if messages.is_empty() {
        super::print_empty_state();
        return Ok(());
    }

    let mut options = FilterOptions::new();
    options.date = date;
    let visible = filter_messages(&messages, &options);

    let positions = search_positions(&visible, query);
    // The viewer lands on the latest match first; mark it the same way here
    let cursor = MatchCursor::new(positions.clone());

    match cli.format {
        OutputFormat::Human => {
            if positions.is_empty() {
                println!("No results found for: {}", query.cyan());
                return Ok(());
            }

            println!(
                "{}",
                colors::header(&format!(
                    "Search results for '{}' ({} matches)",
                    query,
                    colors::format_count(positions.len())
                ))
            );
            println!();

            for &pos in positions.iter().take(limit) {
                let current = cursor.current() == Some(pos);
                println!("{}", human::format_match(visible[pos], query, current));
            }

            if positions.len() > limit {
                eprintln!(
                    "(showing first {} of {} matches)",
                    limit,
                    positions.len()
                );
            }
        }

        OutputFormat::Json => {
            for &pos in positions.iter().take(limit) {
                println!("{}", json::format_message(visible[pos]));
            }
        }

        OutputFormat::Minimal => {
            for &pos in positions.iter().take(limit) {
                println!("{}", minimal::format_message(visible[pos]));
            }
        }
    }

    Ok(())
}
