//! Event types for the Scoutline messaging event bus.
//!
//! `MessagingEvent` is broadcast by the messaging store after each
//! successful mutation. All variants are Clone + Send + Sync for use with
//! tokio broadcast channels. The local notifier listens for `MessageSent`;
//! the store itself never schedules notifications.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::identity::Role;

/// Events emitted by the messaging store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MessagingEvent {
    /// A new chat was created (not emitted for idempotent re-starts).
    ChatStarted {
        chat_id: Uuid,
        player_id: Uuid,
        player_name: String,
    },

    /// A message was appended to a chat.
    MessageSent {
        chat_id: Uuid,
        message_id: Uuid,
        sender: Role,
        text: String,
    },

    /// One side's unread counter for a chat was cleared.
    ChatRead { chat_id: Uuid, role: Role },

    /// One side's unread counters were cleared across all chats.
    AllRead { role: Role },
}

impl MessagingEvent {
    /// The chat this event concerns, or None for store-wide events.
    pub fn chat_id(&self) -> Option<Uuid> {
        match self {
            MessagingEvent::ChatStarted { chat_id, .. }
            | MessagingEvent::MessageSent { chat_id, .. }
            | MessagingEvent::ChatRead { chat_id, .. } => Some(*chat_id),
            MessagingEvent::AllRead { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_sent_serde_roundtrip() {
        let event = MessagingEvent::MessageSent {
            chat_id: Uuid::now_v7(),
            message_id: Uuid::now_v7(),
            sender: Role::Agent,
            text: "hello".to_string(),
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"type\":\"message_sent\""));
        let parsed: MessagingEvent = serde_json::from_str(&json).unwrap();
        assert!(matches!(
            parsed,
            MessagingEvent::MessageSent {
                sender: Role::Agent,
                ..
            }
        ));
    }

    #[test]
    fn test_chat_id_accessor() {
        let id = Uuid::now_v7();
        let event = MessagingEvent::ChatRead {
            chat_id: id,
            role: Role::Player,
        };
        assert_eq!(event.chat_id(), Some(id));
        assert_eq!(
            MessagingEvent::AllRead { role: Role::Agent }.chat_id(),
            None
        );
    }
}
