//! Import command - parse a transcript export into the store

use anyhow::{Context, Result};
use chatview_core::{parse_chat, sender_names};
use chatview_store::ChatStore;
use std::path::Path;

use crate::cli::{Cli, OutputFormat};
use crate::output::colors;

pub fn run(cli: &Cli, store: &ChatStore, file: &Path) -> Result<()> {
    let text = std::fs::read_to_string(file)
        .with_context(|| format!("reading {}", file.display()))?;

    let line_count = text.lines().filter(|l| !l.trim().is_empty()).count();
    let messages = parse_chat(&text);

    // Zero recognized messages is not an error, but it must not wipe a
    // previously imported conversation either.
    if messages.is_empty() {
        match cli.format {
            OutputFormat::Json => println!(
                "{}",
                serde_json::json!({ "imported": 0, "skipped": line_count })
            ),
            _ => println!(
                "{}",
                colors::warning(&format!(
                    "No messages recognized in {}; store left unchanged",
                    file.display()
                ))
            ),
        }
        return Ok(());
    }

    store.save_messages(&messages)?;

    let skipped = line_count - messages.len();
    match cli.format {
        OutputFormat::Json => println!(
            "{}",
            serde_json::json!({ "imported": messages.len(), "skipped": skipped })
        ),
        _ => {
            println!(
                "{}",
                colors::success(&format!(
                    "Imported {} messages ({} lines skipped)",
                    colors::format_count(messages.len()),
                    colors::format_count(skipped)
                ))
            );
            println!(
                "{}: {}",
                colors::label("Senders"),
                sender_names(&messages).join(", ")
            );
        }
    }

    Ok(())
}
