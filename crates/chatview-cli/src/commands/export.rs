//! Export command - write the conversation in its wire format

use anyhow::{Context, Result};
use chatview_store::ChatStore;
use std::path::Path;

use crate::cli::Cli;
use crate::output::colors;
use crate::source;

pub fn run(cli: &Cli, store: &ChatStore, output: Option<&Path>, pretty: bool) -> Result<()> {
    let messages = source::load_messages(store, cli.fallback_url.as_deref())?;
    if messages.is_empty() {
        super::print_empty_state();
        return Ok(());
    }

    // Same JSON array shape the store and the fallback source carry, so an
    // export can be served or re-imported as-is
    let rendered = if pretty {
        serde_json::to_string_pretty(&messages)?
    } else {
        serde_json::to_string(&messages)?
    };

    match output {
        Some(path) => {
            std::fs::write(path, rendered)
                .with_context(|| format!("writing {}", path.display()))?;
            println!(
                "{}",
                colors::success(&format!(
                    "Exported {} messages to {}",
                    colors::format_count(messages.len()),
                    path.display()
                ))
            );
        }
        None => println!("{}", rendered),
    }

    Ok(())
}
