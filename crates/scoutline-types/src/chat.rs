//! Chat and message types for the messaging subsystem.
//!
//! A `Chat` is a single ongoing conversation between one agent and one
//! player: an append-only message log plus two independently maintained
//! unread counters, one per side.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::identity::{PlayerProfile, Role};

/// A single message within a chat. Immutable after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: Uuid,
    pub text: String,
    pub sender: Role,
    pub sent_at: DateTime<Utc>,
    /// Per-message read flag carried over from the source data model.
    /// Informational only -- unread counts are driven by the chat-level
    /// counters, never by scanning this flag.
    pub is_read: bool,
    pub attachment_url: Option<String>,
}

impl ChatMessage {
    /// Create a message with a fresh id and the current timestamp.
    pub fn new(text: impl Into<String>, sender: Role) -> Self {
        Self {
            id: Uuid::now_v7(),
            text: text.into(),
            sender,
            sent_at: Utc::now(),
            is_read: false,
            attachment_url: None,
        }
    }
}

/// A conversation between one agent and one player.
///
/// Invariants maintained by the messaging store:
/// - `last_message`/`last_message_at` always mirror the tail of `messages`
///   (or empty text / creation time while the log is empty);
/// - `unread_for_agent` and `unread_for_player` each count messages from
///   the *other* side not yet acknowledged by this side, maintained
///   incrementally on send and zeroed on mark-as-read;
/// - at most one chat exists per `player_id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chat {
    pub id: Uuid,
    /// The player side of the conversation. Never reassigned.
    pub player_id: Uuid,
    /// Display snapshot taken at chat-creation time.
    pub player_name: String,
    /// Display snapshot taken at chat-creation time.
    pub player_avatar: String,
    pub messages: Vec<ChatMessage>,
    pub last_message: String,
    pub last_message_at: DateTime<Utc>,
    pub unread_for_agent: u32,
    pub unread_for_player: u32,
}

impl Chat {
    /// Create an empty chat for a player, snapshotting display fields.
    pub fn new(player: &PlayerProfile) -> Self {
        Self {
            id: Uuid::now_v7(),
            player_id: player.id,
            player_name: player.name.clone(),
            player_avatar: player.avatar.clone(),
            messages: Vec::new(),
            last_message: String::new(),
            last_message_at: Utc::now(),
            unread_for_agent: 0,
            unread_for_player: 0,
        }
    }

    /// The unread counter belonging to `role`.
    pub fn unread_for(&self, role: Role) -> u32 {
        match role {
            Role::Agent => self.unread_for_agent,
            Role::Player => self.unread_for_player,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_chat_is_empty_with_zeroed_counters() {
        let player = PlayerProfile::new("Marco Rossi", "marco@club.com");
        let chat = Chat::new(&player);
        assert_eq!(chat.player_id, player.id);
        assert_eq!(chat.player_name, "Marco Rossi");
        assert!(chat.messages.is_empty());
        assert!(chat.last_message.is_empty());
        assert_eq!(chat.unread_for_agent, 0);
        assert_eq!(chat.unread_for_player, 0);
    }

    #[test]
    fn test_unread_for_selects_the_right_counter() {
        let player = PlayerProfile::new("Marco", "marco@club.com");
        let mut chat = Chat::new(&player);
        chat.unread_for_agent = 3;
        chat.unread_for_player = 7;
        assert_eq!(chat.unread_for(Role::Agent), 3);
        assert_eq!(chat.unread_for(Role::Player), 7);
    }

    #[test]
    fn test_message_starts_unread_without_attachment() {
        let msg = ChatMessage::new("hello", Role::Agent);
        assert!(!msg.is_read);
        assert!(msg.attachment_url.is_none());
        assert_eq!(msg.sender, Role::Agent);
    }
}
