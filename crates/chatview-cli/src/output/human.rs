//! Human-readable output formatting

use super::colors::*;
use chatview_core::{ChatMessage, ChatStats};
use chatview_store::StoreStats;
use chrono::NaiveDate;
use colored::Colorize;

/// Indent for messages on the sent side of the thread
const SENT_INDENT: usize = 32;

/// Format a date separator line, e.g. `────── Yesterday ──────`
pub fn format_separator(date_key: &str, today: NaiveDate) -> String {
    let text = chatview_core::format_date_label(date_key, today);
    format!("──────  {}  ──────", text).dimmed().to_string()
}

/// Format a message as one thread line.
///
/// Received messages sit on the left margin; sent messages are indented to
/// the right, the terminal stand-in for bubble alignment. An optional search
/// term is highlighted inside the body.
pub fn format_message(msg: &ChatMessage, sent: bool, search: Option<&str>) -> String {
    let indent = if sent {
        " ".repeat(SENT_INDENT)
    } else {
        "  ".to_string()
    };

    let content = match search {
        Some(term) => highlight(&msg.content, term),
        None => msg.content.clone(),
    };

    format!(
        "{}{} {}: {}",
        indent,
        colored_time(&msg.display_time),
        colored_sender(&msg.sender),
        content
    )
}

/// Format a search result line with its date for context
pub fn format_match(msg: &ChatMessage, query: &str, current: bool) -> String {
    let marker = if current { ">" } else { " " };
    format!(
        "{} {} {} {}: {}",
        marker,
        label(&msg.date_key),
        colored_time(&msg.display_time),
        colored_sender(&msg.sender),
        highlight(&msg.content, query)
    )
}

/// Format conversation statistics for the info command
pub fn format_stats(stats: &ChatStats, store: &StoreStats) -> String {
    let mut lines = Vec::new();

    lines.push(format!(
        "{}: {}",
        label("Messages"),
        value(&format_count(stats.message_count))
    ));

    for (sender, count) in &stats.sender_counts {
        lines.push(format!(
            "  {} {}",
            colored_sender(sender),
            label(&format!("({})", format_count(*count)))
        ));
    }

    if let (Some(first), Some(last)) = (&stats.first_date, &stats.last_date) {
        lines.push(format!(
            "{}: {} to {} ({} days)",
            label("Date range"),
            value(first),
            value(last),
            stats.day_count
        ));
    }

    lines.push(format!(
        "{}: {} ({})",
        label("Store"),
        value(&store.store_path.display().to_string()),
        store.format_size()
    ));

    if let Some(updated) = &store.last_updated {
        lines.push(format!("{}: {}", label("Last import"), value(updated)));
    }

    lines.join("\n")
}
