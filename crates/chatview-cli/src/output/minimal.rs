//! Minimal output formatting (content only)

use chatview_core::ChatMessage;

pub fn format_message(msg: &ChatMessage) -> String {
    msg.content.clone()
}
