//! ANSI color helpers for terminal output

use colored::{Color, Colorize};

/// Palette cycled through for sender names
const SENDER_PALETTE: [Color; 5] = [
    Color::Cyan,
    Color::Green,
    Color::Yellow,
    Color::Magenta,
    Color::Blue,
];

/// Get a stable colored rendering of a sender name
pub fn colored_sender(name: &str) -> String {
    let index = name
        .bytes()
        .fold(0usize, |acc, b| acc.wrapping_add(b as usize))
        % SENDER_PALETTE.len();
    name.color(SENDER_PALETTE[index]).bold().to_string()
}

/// Get colored display time
pub fn colored_time(time: &str) -> String {
    time.white().dimmed().to_string()
}

/// Get colored header
pub fn header(text: &str) -> String {
    text.bold().underline().to_string()
}

/// Get colored label
pub fn label(text: &str) -> String {
    text.white().dimmed().to_string()
}

/// Get colored value
pub fn value(text: &str) -> String {
    text.white().to_string()
}

/// Get colored success message
pub fn success(text: &str) -> String {
    format!("{} {}", "✓".green(), text)
}

/// Get colored warning message
pub fn warning(text: &str) -> String {
    format!("{} {}", "⚠".yellow(), text)
}

/// Highlight occurrences of a search term within a line.
///
/// Matching is case-insensitive; the original casing of the matched text is
/// kept. Only works for terms whose lowercase form has the same byte length
/// as the text it matched, which holds for the ASCII searches this serves;
/// anything else is returned unhighlighted.
pub fn highlight(content: &str, term: &str) -> String {
    let term_lower = term.to_lowercase();
    if term_lower.is_empty() {
        return content.to_string();
    }

    let content_lower = content.to_lowercase();
    if content_lower.len() != content.len() {
        return content.to_string();
    }

    let mut result = String::new();
    let mut rest = 0usize;
    for (pos, _) in content_lower.match_indices(&term_lower) {
        if pos < rest {
            continue;
        }
        let Some(matched) = content.get(pos..pos + term_lower.len()) else {
            return content.to_string();
        };
        result.push_str(&content[rest..pos]);
        result.push_str(&matched.black().on_yellow().to_string());
        rest = pos + term_lower.len();
    }
    result.push_str(&content[rest..]);

    result
}

/// Format count with comma separators
pub fn format_count(n: usize) -> String {
    let s = n.to_string();
    let chars: Vec<char> = s.chars().collect();
    let mut result = String::new();

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(*c);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(7), "7");
        assert_eq!(format_count(1234), "1,234");
        assert_eq!(format_count(1234567), "1,234,567");
    }

    #[test]
    fn test_highlight_keeps_unmatched_text() {
        colored::control::set_override(false);
        assert_eq!(highlight("Meeting at 10:00", "meet"), "Meeting at 10:00");
        assert_eq!(highlight("hello", "xyz"), "hello");
    }
}
