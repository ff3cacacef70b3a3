//! Date grouping and separator labels

use crate::types::ChatMessage;
use chrono::NaiveDate;

/// Messages sharing one calendar day, in transcript order
#[derive(Debug, Clone)]
pub struct DateGroup<'a> {
    pub date_key: &'a str,
    pub messages: Vec<&'a ChatMessage>,
}

/// Bucket messages by date key in a single pass.
///
/// Groups appear in first-seen key order and keep the relative order of
/// their messages, so the union of all buckets is the input sequence. The
/// renderer uses this to insert date separators.
pub fn group_by_date<'a, I>(messages: I) -> Vec<DateGroup<'a>>
where
    I: IntoIterator<Item = &'a ChatMessage>,
{
    let mut groups: Vec<DateGroup> = Vec::new();
    let mut index: std::collections::HashMap<&str, usize> = std::collections::HashMap::new();

    for msg in messages {
        match index.get(msg.date_key.as_str()) {
            Some(&at) => groups[at].messages.push(msg),
            None => {
                index.insert(&msg.date_key, groups.len());
                groups.push(DateGroup {
                    date_key: &msg.date_key,
                    messages: vec![msg],
                });
            }
        }
    }

    groups
}

/// Human label for a date separator: "Today", "Yesterday", or "Sep 28, 2024".
///
/// Pure function of the two dates; an unparseable key is returned unchanged.
pub fn format_date_label(date_key: &str, today: NaiveDate) -> String {
    let Ok(date) = NaiveDate::parse_from_str(date_key, "%Y-%m-%d") else {
        return date_key.to_string();
    };

    if date == today {
        "Today".to_string()
    } else if date == today.pred_opt().unwrap_or(today) {
        "Yesterday".to_string()
    } else {
        date.format("%b %-d, %Y").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_message(date: (i32, u32, u32), sender: &str, content: &str) -> ChatMessage {
        let timestamp = NaiveDate::from_ymd_opt(date.0, date.1, date.2)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        ChatMessage::new(timestamp, "9:00 am", sender, content)
    }

    #[test]
    fn test_group_by_date_buckets_preserve_order() {
        let messages = vec![
            make_message((2024, 2, 1), "Alice", "one"),
            make_message((2024, 2, 1), "Bob", "two"),
            make_message((2024, 2, 2), "Alice", "three"),
            make_message((2024, 2, 1), "Bob", "late edit on day one"),
        ];

        let groups = group_by_date(&messages);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].date_key, "2024-02-01");
        assert_eq!(groups[1].date_key, "2024-02-02");

        // Union of buckets equals the input, order preserved within each
        let flattened: Vec<&str> = groups
            .iter()
            .flat_map(|g| g.messages.iter().map(|m| m.content.as_str()))
            .collect();
        assert_eq!(flattened, vec!["one", "two", "late edit on day one", "three"]);
    }

    #[test]
    fn test_group_by_date_empty() {
        let messages: Vec<ChatMessage> = Vec::new();
        assert!(group_by_date(&messages).is_empty());
    }

    #[test]
    fn test_date_labels() {
        let today = NaiveDate::from_ymd_opt(2024, 9, 30).unwrap();
        assert_eq!(format_date_label("2024-09-30", today), "Today");
        assert_eq!(format_date_label("2024-09-29", today), "Yesterday");
        assert_eq!(format_date_label("2024-09-28", today), "Sep 28, 2024");
        assert_eq!(format_date_label("2024-03-05", today), "Mar 5, 2024");
    }

    #[test]
    fn test_unparseable_key_passes_through() {
        let today = NaiveDate::from_ymd_opt(2024, 9, 30).unwrap();
        assert_eq!(format_date_label("not-a-date", today), "not-a-date");
    }
}
