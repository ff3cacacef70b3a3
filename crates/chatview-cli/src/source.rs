//! Data source cascade: stored blob first, fallback URL second

use anyhow::{Context, Result};
use chatview_core::ChatMessage;
use chatview_store::ChatStore;

use crate::output::colors;

/// Load the current message sequence.
///
/// The store is checked first; when it holds nothing (or only a corrupt
/// blob), the fallback URL is fetched if one is configured. A fallback
/// failure is reported as a warning and falls through to the empty state,
/// so read commands keep working against whatever was loadable. Fetched
/// data is not written back: only explicit imports persist.
pub fn load_messages(store: &ChatStore, fallback_url: Option<&str>) -> Result<Vec<ChatMessage>> {
    if let Some(messages) = store.load_messages()? {
        return Ok(messages);
    }

    if let Some(url) = fallback_url {
        match fetch_fallback(url) {
            Ok(messages) => {
                tracing::debug!(url, count = messages.len(), "loaded fallback transcript");
                return Ok(messages);
            }
            Err(err) => {
                eprintln!(
                    "{}",
                    colors::warning(&format!("fallback source unavailable: {err:#}"))
                );
            }
        }
    }

    Ok(Vec::new())
}

/// Fetch the fallback transcript: a JSON array in the same wire shape the
/// store and `chatview export` use.
fn fetch_fallback(url: &str) -> Result<Vec<ChatMessage>> {
    let response = reqwest::blocking::get(url)
        .with_context(|| format!("fetching {url}"))?
        .error_for_status()?;

    let messages = response
        .json::<Vec<ChatMessage>>()
        .context("decoding fallback transcript")?;

    Ok(messages)
}
