//! Typed load/save of the cached message sequence

use crate::connection::{ChatStore, StoreError};
use chatview_core::ChatMessage;

/// Fixed blob key the serialized message sequence lives under
pub const MESSAGES_KEY: &str = "messages";

impl ChatStore {
    /// Load the cached message sequence.
    ///
    /// A stored blob that fails to deserialize is treated the same as an
    /// absent one, so a corrupt cache falls through to the next data source
    /// instead of wedging the viewer.
    pub fn load_messages(&self) -> Result<Option<Vec<ChatMessage>>, StoreError> {
        let Some(raw) = self.get(MESSAGES_KEY)? else {
            return Ok(None);
        };

        match serde_json::from_str(&raw) {
            Ok(messages) => Ok(Some(messages)),
            Err(err) => {
                tracing::warn!(%err, "stored messages failed to deserialize, treating as absent");
                Ok(None)
            }
        }
    }

    /// Replace the cached message sequence with a new one.
    ///
    /// The whole blob is swapped in a single statement; readers never see a
    /// partially updated sequence.
    pub fn save_messages(&self, messages: &[ChatMessage]) -> Result<(), StoreError> {
        let raw = serde_json::to_string(messages)?;
        self.set(MESSAGES_KEY, &raw)
    }
}
