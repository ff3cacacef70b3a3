//! Core type definitions for chat transcript data

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A single message parsed from a chat transcript export.
///
/// The export format carries no timezone, so `timestamp` is wall-clock time
/// with the zone left unspecified. `display_time` keeps the time string
/// exactly as it appeared in the export; it is never reconstructed from
/// `timestamp`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Wall-clock timestamp (naive, no zone)
    #[serde(rename = "datetime")]
    pub timestamp: NaiveDateTime,
    /// Calendar date in `YYYY-MM-DD` form, used for grouping and day filters
    #[serde(rename = "date")]
    pub date_key: String,
    /// Original time string from the export, e.g. "10:42 pm"
    #[serde(rename = "time")]
    pub display_time: String,
    /// Sender label, matched by exact string only
    pub sender: String,
    /// Message body, trimmed of surrounding whitespace
    pub content: String,
}

impl ChatMessage {
    /// Build a message, deriving the date key from the timestamp
    pub fn new(
        timestamp: NaiveDateTime,
        display_time: impl Into<String>,
        sender: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            date_key: timestamp.date().format("%Y-%m-%d").to_string(),
            timestamp,
            display_time: display_time.into(),
            sender: sender.into(),
            content: content.into(),
        }
    }

    /// Case-insensitive substring search over the message body
    pub fn matches(&self, term: &str) -> bool {
        self.content.to_lowercase().contains(&term.to_lowercase())
    }

    /// Get preview text for list display
    pub fn preview(&self, max_len: usize) -> String {
        let preview = self.content.lines().next().unwrap_or("").trim();
        // Use chars for proper unicode handling
        let chars: Vec<char> = preview.chars().collect();
        if chars.len() > max_len {
            let truncated: String = chars[..max_len.saturating_sub(3)].iter().collect();
            format!("{}...", truncated)
        } else {
            preview.to_string()
        }
    }
}

/// Aggregate statistics over a parsed message sequence
#[derive(Debug, Clone, Default)]
pub struct ChatStats {
    pub message_count: usize,
    /// Per-sender message counts, in first-seen order
    pub sender_counts: Vec<(String, usize)>,
    /// Earliest date key present
    pub first_date: Option<String>,
    /// Latest date key present
    pub last_date: Option<String>,
    /// Number of distinct days
    pub day_count: usize,
}

impl ChatStats {
    /// Compute statistics in a single pass over the messages
    pub fn collect(messages: &[ChatMessage]) -> Self {
        let mut stats = ChatStats {
            message_count: messages.len(),
            ..Default::default()
        };

        let mut days = std::collections::HashSet::new();
        for msg in messages {
            match stats.sender_counts.iter_mut().find(|(s, _)| s == &msg.sender) {
                Some((_, count)) => *count += 1,
                None => stats.sender_counts.push((msg.sender.clone(), 1)),
            }

            days.insert(msg.date_key.as_str());

            // Date keys are zero-padded YYYY-MM-DD, so string order is date order
            match &stats.first_date {
                Some(first) if *first <= msg.date_key => {}
                _ => stats.first_date = Some(msg.date_key.clone()),
            }
            match &stats.last_date {
                Some(last) if *last >= msg.date_key => {}
                _ => stats.last_date = Some(msg.date_key.clone()),
            }
        }
        stats.day_count = days.len();

        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn make_message(datetime: &str, sender: &str, content: &str) -> ChatMessage {
        let timestamp =
            NaiveDateTime::parse_from_str(datetime, "%Y-%m-%dT%H:%M:%S").unwrap();
        ChatMessage::new(timestamp, "10:42 pm", sender, content)
    }

    #[test]
    fn test_date_key_derived_from_timestamp() {
        let msg = make_message("2024-02-01T22:42:00", "Alice", "Hello there");
        assert_eq!(msg.date_key, "2024-02-01");
    }

    #[test]
    fn test_serde_round_trip() {
        let messages = vec![
            make_message("2024-02-01T22:42:00", "Alice", "Hello there"),
            make_message("2024-02-02T09:00:00", "Bob", "Meeting at 10:00: bring laptop"),
        ];

        let json = serde_json::to_string(&messages).unwrap();
        let back: Vec<ChatMessage> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, messages);
    }

    #[test]
    fn test_wire_field_names() {
        let msg = make_message("2024-02-01T22:42:00", "Alice", "Hello there");
        let value = serde_json::to_value(&msg).unwrap();
        assert_eq!(value["datetime"], "2024-02-01T22:42:00");
        assert_eq!(value["date"], "2024-02-01");
        assert_eq!(value["time"], "10:42 pm");
        assert_eq!(value["sender"], "Alice");
        assert_eq!(value["content"], "Hello there");
    }

    #[test]
    fn test_matches_is_case_insensitive() {
        let msg = make_message("2024-02-01T22:42:00", "Alice", "Hello There");
        assert!(msg.matches("hello"));
        assert!(msg.matches("THERE"));
        assert!(!msg.matches("goodbye"));
    }

    #[test]
    fn test_stats_collect() {
        let messages = vec![
            make_message("2024-02-01T22:42:00", "Alice", "Hello"),
            make_message("2024-02-01T22:43:00", "Bob", "Hi"),
            make_message("2024-02-03T08:00:00", "Alice", "Morning"),
        ];

        let stats = ChatStats::collect(&messages);
        assert_eq!(stats.message_count, 3);
        assert_eq!(
            stats.sender_counts,
            vec![("Alice".to_string(), 2), ("Bob".to_string(), 1)]
        );
        assert_eq!(stats.first_date.as_deref(), Some("2024-02-01"));
        assert_eq!(stats.last_date.as_deref(), Some("2024-02-03"));
        assert_eq!(stats.day_count, 2);
    }

    #[test]
    fn test_preview_truncates_on_char_boundary() {
        let timestamp = NaiveDate::from_ymd_opt(2024, 2, 1)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        let msg = ChatMessage::new(timestamp, "9:00 am", "Alice", "héllo wörld, this is long");
        let preview = msg.preview(10);
        assert_eq!(preview.chars().count(), 10);
        assert!(preview.ends_with("..."));
    }
}
