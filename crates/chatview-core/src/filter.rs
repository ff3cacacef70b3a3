//! Message filtering and search utilities

use crate::types::ChatMessage;
use chrono::NaiveDate;

/// Filter options for parsed messages
#[derive(Debug, Clone, Default)]
pub struct FilterOptions {
    /// Case-insensitive text search over message bodies
    pub search: Option<String>,
    /// Exact-match sender filter
    pub sender: Option<String>,
    /// Keep only messages from this calendar day
    pub date: Option<NaiveDate>,
}

impl FilterOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn with_sender(mut self, sender: impl Into<String>) -> Self {
        self.sender = Some(sender.into());
        self
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }
}

/// Filter messages based on options, preserving order
pub fn filter_messages<'a>(
    messages: &'a [ChatMessage],
    options: &FilterOptions,
) -> Vec<&'a ChatMessage> {
    let mut result: Vec<&ChatMessage> = messages.iter().collect();

    if let Some(sender) = &options.sender {
        result.retain(|msg| &msg.sender == sender);
    }

    if let Some(date) = &options.date {
        let key = date.format("%Y-%m-%d").to_string();
        result.retain(|msg| msg.date_key == key);
    }

    if let Some(search) = &options.search {
        result.retain(|msg| msg.matches(search));
    }

    result
}

/// Get distinct sender names in first-seen order.
///
/// The first sender in the transcript is treated as the primary one (the
/// "sent" side of the rendered thread).
pub fn sender_names(messages: &[ChatMessage]) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for msg in messages {
        if !names.contains(&msg.sender) {
            names.push(msg.sender.clone());
        }
    }
    names
}

/// Indices of messages matching a search term, in order
pub fn search_positions(messages: &[&ChatMessage], term: &str) -> Vec<usize> {
    messages
        .iter()
        .enumerate()
        .filter(|(_, msg)| msg.matches(term))
        .map(|(index, _)| index)
        .collect()
}

/// Navigation over a list of search match positions.
///
/// Starts at the latest match and wraps around in both directions, matching
/// the viewer's next/previous behavior.
#[derive(Debug, Clone)]
pub struct MatchCursor {
    positions: Vec<usize>,
    current: usize,
}

impl MatchCursor {
    pub fn new(positions: Vec<usize>) -> Self {
        let current = positions.len().saturating_sub(1);
        Self { positions, current }
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Message index of the current match, if any
    pub fn current(&self) -> Option<usize> {
        self.positions.get(self.current).copied()
    }

    /// 1-based ordinal of the current match, for "match 3/7" displays
    pub fn ordinal(&self) -> usize {
        if self.positions.is_empty() {
            0
        } else {
            self.current + 1
        }
    }

    /// Advance to the next match, wrapping to the first
    pub fn next(&mut self) -> Option<usize> {
        if self.positions.is_empty() {
            return None;
        }
        self.current = (self.current + 1) % self.positions.len();
        self.current()
    }

    /// Step back to the previous match, wrapping to the last
    pub fn prev(&mut self) -> Option<usize> {
        if self.positions.is_empty() {
            return None;
        }
        self.current = if self.current == 0 {
            self.positions.len() - 1
        } else {
            self.current - 1
        };
        self.current()
    }
}
