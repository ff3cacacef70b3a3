//! View command - render the conversation thread

use anyhow::Result;
use chatview_core::{
    filter_messages, group_by_date, search_positions, sender_names, FilterOptions,
};
use chrono::NaiveDate;
use chatview_store::ChatStore;

use crate::cli::{Cli, OutputFormat};
use crate::output::{colors, human, json, minimal};
use crate::source;

#[allow(clippy::too_many_arguments)]
pub fn run(
    cli: &Cli,
    store: &ChatStore,
    date: Option<NaiveDate>,
    sender: Option<&str>,
    search: Option<&str>,
    last: Option<usize>,
    first: Option<usize>,
    swap: bool,
) -> Result<()> {
    let messages = source::load_messages(store, cli.fallback_url.as_deref())?;
    if messages.is_empty() {
        super::print_empty_state();
        return Ok(());
    }

    // The first sender in the transcript is the sent side unless swapped
    let primary = sender_names(&messages).into_iter().next().unwrap_or_default();

    let mut options = FilterOptions::new();
    options.date = date;
    options.sender = sender.map(str::to_string);
    let filtered = filter_messages(&messages, &options);

    // Window after filtering so --last applies to what is shown
    let window: &[&chatview_core::ChatMessage] = match (last, first) {
        (Some(n), _) => &filtered[filtered.len().saturating_sub(n)..],
        (_, Some(n)) => &filtered[..n.min(filtered.len())],
        _ => &filtered,
    };

    match cli.format {
        OutputFormat::Human => {
            let today = chrono::Local::now().date_naive();
            for group in group_by_date(window.iter().copied()) {
                println!("{}", human::format_separator(group.date_key, today));
                for &msg in &group.messages {
                    let sent = (msg.sender == primary) != swap;
                    println!("{}", human::format_message(msg, sent, search));
                }
            }

            if let Some(term) = search {
                let matches = search_positions(window, term);
                eprintln!(
                    "{} matches for '{}'",
                    colors::format_count(matches.len()),
                    term
                );
            }
        }

        OutputFormat::Json => {
            for &msg in window {
                println!("{}", json::format_message(msg));
            }
        }

        OutputFormat::Minimal => {
            for &msg in window {
                println!("{}", minimal::format_message(msg));
            }
        }
    }

    if window.is_empty() {
        eprintln!("No messages match the given filters");
    }

    Ok(())
}
