//! Chat-panel room list and its search box.

use serde::{Deserialize, Serialize};

/// One chat room as listed in the chat panel
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChatRecord {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub last_message: String,
    /// Title of the property the conversation is about
    #[serde(default)]
    pub property: String,
}

impl ChatRecord {
    /// Case-insensitive substring match on name, last message or property.
    /// `needle` must already be lowercased.
    fn matches(&self, needle: &str) -> bool {
        [&self.name, &self.last_message, &self.property]
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}

/// Rooms matching the search box text; an empty term keeps every room
pub fn filter_chats<'a>(chats: &'a [ChatRecord], term: &str) -> Vec<&'a ChatRecord> {
    let needle = term.to_lowercase();
    chats.iter().filter(|chat| chat.matches(&needle)).collect()
}
