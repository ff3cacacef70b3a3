//! JSON output formatting

use chatview_core::{ChatMessage, ChatStats};
use chatview_store::StoreStats;

/// Output a message as one JSON object (the wire format)
pub fn format_message(msg: &ChatMessage) -> String {
    serde_json::to_string(msg).unwrap_or_default()
}

/// Output statistics as JSON
pub fn format_stats(stats: &ChatStats, store: &StoreStats) -> String {
    serde_json::json!({
        "message_count": stats.message_count,
        "senders": stats
            .sender_counts
            .iter()
            .map(|(sender, count)| serde_json::json!({ "sender": sender, "count": count }))
            .collect::<Vec<_>>(),
        "first_date": stats.first_date,
        "last_date": stats.last_date,
        "day_count": stats.day_count,
        "store_path": store.store_path.display().to_string(),
        "store_size_bytes": store.size_bytes,
        "store_last_updated": store.last_updated,
    })
    .to_string()
}
