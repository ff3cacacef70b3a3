//! Transcript parsing for exported WhatsApp chats
//!
//! The export is plain text, one message per line:
//!
//! ```text
//! 01/02/24, 10:42 pm - Alice: Hello there
//! ```
//!
//! Lines that do not match this shape (system notices, continuation lines of
//! multi-line messages, malformed timestamps) are skipped, never errors.

use crate::types::ChatMessage;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;
use std::sync::LazyLock;

/// Message line grammar, compiled once.
///
/// `DD/MM/YY, H:MM am - Sender: content` with 1-2 digit day/month/hour, a
/// 2-digit year and minute, case-insensitive am/pm, and a colon-free sender.
/// The first `: ` after the sender is the only delimiter; the body may
/// contain colons and dashes.
static MESSAGE_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<day>\d{1,2})/(?P<month>\d{1,2})/(?P<year>\d{2}),\s+(?P<time>(?P<hour>\d{1,2}):(?P<minute>\d{2})\s+(?P<period>(?i:[ap]m)))\s+-\s+(?P<sender>[^:]+):\s+(?P<content>.+)$",
    )
    .unwrap()
});

/// WhatsApp exports use U+202F (narrow no-break space) before the am/pm
/// marker; some locales emit U+00A0. Fold both to plain spaces so the
/// grammar sees one shape.
fn normalize_spaces(line: &str) -> String {
    line.replace(['\u{202F}', '\u{00A0}'], " ")
}

/// Parse a single transcript line into a ChatMessage.
///
/// Returns `None` for lines that do not match the grammar, lines whose
/// sender or body is empty after trimming, and lines whose field values are
/// semantically invalid (day 31 in a 30-day month, an hour that converts
/// past 23).
pub fn parse_line(raw: &str) -> Option<ChatMessage> {
    let caps = MESSAGE_LINE.captures(raw)?;

    let day: u32 = caps["day"].parse().ok()?;
    let month: u32 = caps["month"].parse().ok()?;
    // Two-digit year; transcripts before 2000 or after 2099 are unsupported
    let year: i32 = 2000 + caps["year"].parse::<i32>().ok()?;

    let hour: u32 = caps["hour"].parse().ok()?;
    let minute: u32 = caps["minute"].parse().ok()?;
    let hour24 = match (caps["period"].to_ascii_lowercase().as_str(), hour) {
        ("pm", h) if h != 12 => h + 12,
        ("am", 12) => 0,
        (_, h) => h,
    };

    let sender = caps["sender"].trim();
    let content = caps["content"].trim();
    if sender.is_empty() || content.is_empty() {
        return None;
    }

    // Checked constructors reject values that matched the grammar but make
    // no calendar sense; the line is skipped like any other malformed one.
    let date = match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        None => {
            tracing::warn!(line = raw, "transcript line has an impossible date");
            return None;
        }
    };
    let time = match NaiveTime::from_hms_opt(hour24, minute, 0) {
        Some(time) => time,
        None => {
            tracing::warn!(line = raw, "transcript line has an impossible time");
            return None;
        }
    };

    Some(ChatMessage::new(
        NaiveDateTime::new(date, time),
        caps["time"].to_string(),
        sender,
        content,
    ))
}

/// Parse a full transcript export into an ordered message sequence.
///
/// Lines are processed independently; output order is input order (the
/// parser never sorts). Unparseable lines are skipped, so an input with no
/// recognizable messages yields an empty vector rather than an error.
pub fn parse_chat(text: &str) -> Vec<ChatMessage> {
    let mut messages = Vec::new();

    for (index, raw) in text.lines().enumerate() {
        let line = normalize_spaces(raw);
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match parse_line(line) {
            Some(message) => messages.push(message),
            None => tracing::debug!(line_number = index + 1, "skipped transcript line"),
        }
    }

    messages
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_line() {
        let msg = parse_line("01/02/24, 10:42 pm - Alice: Hello there").unwrap();
        assert_eq!(msg.sender, "Alice");
        assert_eq!(msg.content, "Hello there");
        assert_eq!(msg.date_key, "2024-02-01");
        assert_eq!(msg.display_time, "10:42 pm");
        assert_eq!(msg.timestamp.to_string(), "2024-02-01 22:42:00");
    }

    #[test]
    fn test_hour_conversion() {
        let cases = [
            ("12:00 am", "00:00:00"),
            ("12:00 pm", "12:00:00"),
            ("1:05 am", "01:05:00"),
            ("1:05 pm", "13:05:00"),
        ];
        for (time, expected) in cases {
            let line = format!("01/02/24, {} - Alice: hi", time);
            let msg = parse_line(&line).unwrap();
            assert_eq!(msg.timestamp.time().to_string(), expected, "for {}", time);
        }
    }

    #[test]
    fn test_two_digit_year_expansion() {
        let msg = parse_line("01/02/24, 9:00 am - Alice: hi").unwrap();
        assert_eq!(msg.timestamp.date().to_string(), "2024-02-01");

        // Four-digit years are outside the grammar
        assert!(parse_line("01/02/2024, 9:00 am - Alice: hi").is_none());
    }

    #[test]
    fn test_display_time_preserved_verbatim() {
        let msg = parse_line("01/02/24, 10:42 PM - Alice: hi").unwrap();
        assert_eq!(msg.display_time, "10:42 PM");
        assert_eq!(msg.timestamp.time().to_string(), "22:42:00");
    }

    #[test]
    fn test_embedded_colon_stays_in_content() {
        let msg = parse_line("01/02/24, 9:00 am - Bob: Meeting at 10:00: bring laptop").unwrap();
        assert_eq!(msg.sender, "Bob");
        assert_eq!(msg.content, "Meeting at 10:00: bring laptop");
    }

    #[test]
    fn test_system_notice_is_skipped() {
        // No `sender: ` delimiter
        let line = "Messages to this group are now secured with end-to-end encryption.";
        assert!(parse_line(line).is_none());
        assert!(parse_chat(line).is_empty());
    }

    #[test]
    fn test_impossible_date_is_skipped() {
        assert!(parse_line("31/02/24, 9:00 am - Alice: hi").is_none());
        assert!(parse_line("01/13/24, 9:00 am - Alice: hi").is_none());
        // Grammar-valid hour that converts past 23
        assert!(parse_line("01/02/24, 13:00 pm - Alice: hi").is_none());
    }

    #[test]
    fn test_empty_body_is_discarded() {
        assert!(parse_line("01/02/24, 9:00 am - Alice:    ").is_none());
    }

    #[test]
    fn test_narrow_space_before_period_is_normalized() {
        let text = "01/02/24, 10:42\u{202F}pm - Alice: Hello there";
        let messages = parse_chat(text);
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].display_time, "10:42 pm");
    }

    #[test]
    fn test_mixed_input_keeps_valid_lines_in_order() {
        let text = "\
01/02/24, 10:42 pm - Alice: Hello there

Messages to this group are now secured with end-to-end encryption.
this is a continuation line without a timestamp
02/02/24, 8:15 am - Bob: Morning
31/02/24, 9:00 am - Carol: never happened
02/02/24, 8:20 am - Alice: Morning to you";

        let messages = parse_chat(text);
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[0].sender, "Alice");
        assert_eq!(messages[1].sender, "Bob");
        assert_eq!(messages[2].content, "Morning to you");
    }

    #[test]
    fn test_empty_input_yields_empty_sequence() {
        assert!(parse_chat("").is_empty());
        assert!(parse_chat("\n\n   \n").is_empty());
    }
}
