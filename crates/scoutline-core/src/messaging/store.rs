//! Messaging store: the only mutation path for chats and read-state.
//!
//! Owns the ordered chat collection. Every operation takes the acting
//! `Role` explicitly -- the store never asks the session manager who is
//! acting. Mutations on a missing chat are tolerated no-ops (the caller
//! may race with UI state or hold a stale id), never errors.
//!
//! The store publishes a `MessagingEvent` after each successful mutation;
//! side effects such as local notifications live in subscribers, not here.

use std::sync::{Arc, RwLock};

use scoutline_types::chat::{Chat, ChatMessage};
use scoutline_types::event::MessagingEvent;
use scoutline_types::identity::{PlayerProfile, Role};
use tracing::{debug, info};
use uuid::Uuid;

use crate::event::EventBus;

/// Owns the set of conversations and their unread counters.
///
/// Cloning produces a shared handle over the same underlying collection
/// (backed by `Arc`), so spawned tasks -- the read-receipt scheduler --
/// can reach the store. Reads return cloned snapshots; the lock is never
/// held across an await point.
#[derive(Clone)]
pub struct MessagingStore {
    chats: Arc<RwLock<Vec<Chat>>>,
    events: EventBus,
}

impl MessagingStore {
    /// Create an empty store publishing on the given bus.
    pub fn new(events: EventBus) -> Self {
        Self {
            chats: Arc::new(RwLock::new(Vec::new())),
            events,
        }
    }

    /// Subscribe to the store's event stream.
    pub fn subscribe(&self) -> tokio::sync::broadcast::Receiver<MessagingEvent> {
        self.events.subscribe()
    }

    /// Return the chat for this player, creating it if none exists.
    ///
    /// Idempotent by `player_id` (not by chat id). A newly created chat is
    /// inserted at the front of the collection; existing chats keep their
    /// position.
    pub fn start_chat(&self, player: &PlayerProfile) -> Chat {
        let created = {
            let mut chats = self.chats.write().unwrap_or_else(|e| e.into_inner());
            if let Some(existing) = chats.iter().find(|c| c.player_id == player.id) {
                return existing.clone();
            }
            let chat = Chat::new(player);
            chats.insert(0, chat.clone());
            chat
        };

        info!(chat_id = %created.id, player = %created.player_name, "chat started");
        self.events.publish(MessagingEvent::ChatStarted {
            chat_id: created.id,
            player_id: created.player_id,
            player_name: created.player_name.clone(),
        });
        created
    }

    /// Append a message and charge the recipient's unread counter.
    ///
    /// No-op for an unknown `chat_id` or empty text. On success the chat's
    /// `last_message`/`last_message_at` mirror the new tail and a
    /// `MessageSent` event is published fire-and-forget.
    pub fn send_message(&self, chat_id: Uuid, sender: Role, text: &str) {
        if text.trim().is_empty() {
            debug!(chat_id = %chat_id, "ignoring empty message");
            return;
        }

        let sent = {
            let mut chats = self.chats.write().unwrap_or_else(|e| e.into_inner());
            let Some(chat) = chats.iter_mut().find(|c| c.id == chat_id) else {
                debug!(chat_id = %chat_id, "ignoring message for unknown chat");
                return;
            };

            let message = ChatMessage::new(text, sender);
            chat.last_message = message.text.clone();
            chat.last_message_at = message.sent_at;
            match sender.recipient() {
                Role::Agent => chat.unread_for_agent += 1,
                Role::Player => chat.unread_for_player += 1,
            }
            let id = message.id;
            chat.messages.push(message);
            id
        };

        self.events.publish(MessagingEvent::MessageSent {
            chat_id,
            message_id: sent,
            sender,
            text: text.to_string(),
        });
    }

    /// Zero `role`'s unread counter on one chat.
    ///
    /// The other side's counter and the per-message `is_read` flags are
    /// untouched. No-op if the chat is missing.
    pub fn mark_chat_as_read(&self, chat_id: Uuid, role: Role) {
        let found = {
            let mut chats = self.chats.write().unwrap_or_else(|e| e.into_inner());
            match chats.iter_mut().find(|c| c.id == chat_id) {
                Some(chat) => {
                    match role {
                        Role::Agent => chat.unread_for_agent = 0,
                        Role::Player => chat.unread_for_player = 0,
                    }
                    true
                }
                None => false,
            }
        };

        if found {
            self.events
                .publish(MessagingEvent::ChatRead { chat_id, role });
        }
    }

    /// Zero `role`'s unread counter on every chat.
    pub fn mark_all_as_read(&self, role: Role) {
        {
            let mut chats = self.chats.write().unwrap_or_else(|e| e.into_inner());
            for chat in chats.iter_mut() {
                match role {
                    Role::Agent => chat.unread_for_agent = 0,
                    Role::Player => chat.unread_for_player = 0,
                }
            }
        }
        self.events.publish(MessagingEvent::AllRead { role });
    }

    // --- Read-only queries ---

    /// Total unread for `role` across all chats, used for badge counts.
    ///
    /// Recomputed on every call -- counters can change between reads.
    pub fn total_unread(&self, role: Role) -> u32 {
        self.chats
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .map(|c| c.unread_for(role))
            .sum()
    }

    /// Snapshot of the chat collection in display order.
    pub fn chats(&self) -> Vec<Chat> {
        self.chats
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Snapshot of a single chat, if it exists.
    pub fn chat(&self, chat_id: Uuid) -> Option<Chat> {
        self.chats
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .find(|c| c.id == chat_id)
            .cloned()
    }
}

impl std::fmt::Debug for MessagingStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let chats = self.chats.read().unwrap_or_else(|e| e.into_inner());
        f.debug_struct("MessagingStore")
            .field("chat_count", &chats.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::broadcast::error::TryRecvError;

    fn store() -> MessagingStore {
        MessagingStore::new(EventBus::new(64))
    }

    fn player(name: &str) -> PlayerProfile {
        PlayerProfile::new(name, format!("{}@club.com", name.to_lowercase()))
    }

    #[test]
    fn start_chat_is_idempotent_by_player_id() {
        let store = store();
        let p = player("Marco");
        let first = store.start_chat(&p);
        let second = store.start_chat(&p);

        assert_eq!(first.id, second.id);
        let all = store.chats();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].player_id, p.id);
    }

    #[test]
    fn new_chats_are_inserted_at_the_front() {
        let store = store();
        let first = store.start_chat(&player("Marco"));
        let second = store.start_chat(&player("Luka"));

        let all = store.chats();
        assert_eq!(all[0].id, second.id);
        assert_eq!(all[1].id, first.id);

        // Re-starting an existing chat does not reorder.
        store.start_chat(&player_with_id(first.player_id));
        assert_eq!(store.chats()[0].id, second.id);
    }

    fn player_with_id(id: Uuid) -> PlayerProfile {
        let mut p = player("Marco");
        p.id = id;
        p
    }

    #[test]
    fn send_message_updates_tail_and_recipient_counter() {
        let store = store();
        let chat = store.start_chat(&player("Marco"));

        store.send_message(chat.id, Role::Agent, "hello");

        let chat = store.chat(chat.id).unwrap();
        assert_eq!(chat.last_message, "hello");
        assert_eq!(chat.messages.len(), 1);
        assert_eq!(chat.last_message_at, chat.messages[0].sent_at);
        assert_eq!(chat.unread_for_player, 1);
        assert_eq!(chat.unread_for_agent, 0);
    }

    #[test]
    fn n_messages_from_player_add_n_to_agent_counter_only() {
        let store = store();
        let chat = store.start_chat(&player("Marco"));
        store.send_message(chat.id, Role::Agent, "seed"); // unread_for_player = 1

        for i in 0..4 {
            store.send_message(chat.id, Role::Player, &format!("reply {i}"));
        }

        let chat = store.chat(chat.id).unwrap();
        assert_eq!(chat.unread_for_agent, 4);
        assert_eq!(chat.unread_for_player, 1);
        assert_eq!(chat.last_message, "reply 3");
    }

    #[test]
    fn send_message_to_unknown_chat_is_a_noop() {
        let store = store();
        let chat = store.start_chat(&player("Marco"));
        let mut rx = store.subscribe();

        store.send_message(Uuid::now_v7(), Role::Agent, "lost");

        assert_eq!(store.chats().len(), 1);
        assert!(store.chat(chat.id).unwrap().messages.is_empty());
        assert!(matches!(rx.try_recv(), Err(TryRecvError::Empty)));
    }

    #[test]
    fn empty_text_is_a_noop() {
        let store = store();
        let chat = store.start_chat(&player("Marco"));

        store.send_message(chat.id, Role::Agent, "   ");

        let chat = store.chat(chat.id).unwrap();
        assert!(chat.messages.is_empty());
        assert_eq!(chat.unread_for_player, 0);
    }

    #[test]
    fn mark_chat_as_read_zeroes_only_that_side() {
        let store = store();
        let chat = store.start_chat(&player("Marco"));
        store.send_message(chat.id, Role::Player, "a");
        store.send_message(chat.id, Role::Player, "b");
        store.send_message(chat.id, Role::Agent, "c");

        store.mark_chat_as_read(chat.id, Role::Agent);

        let chat = store.chat(chat.id).unwrap();
        assert_eq!(chat.unread_for_agent, 0);
        assert_eq!(chat.unread_for_player, 1);
        // Per-message flags stay untouched.
        assert!(chat.messages.iter().all(|m| !m.is_read));
    }

    #[test]
    fn mark_chat_as_read_on_missing_chat_is_a_noop() {
        let store = store();
        store.mark_chat_as_read(Uuid::now_v7(), Role::Agent);
        assert!(store.chats().is_empty());
    }

    #[test]
    fn mark_all_as_read_zeroes_one_side_on_every_chat() {
        let store = store();
        let a = store.start_chat(&player("Marco"));
        let b = store.start_chat(&player("Luka"));
        store.send_message(a.id, Role::Agent, "x");
        store.send_message(b.id, Role::Agent, "y");
        store.send_message(b.id, Role::Player, "z");

        store.mark_all_as_read(Role::Player);

        for chat in store.chats() {
            assert_eq!(chat.unread_for_player, 0);
        }
        assert_eq!(store.chat(b.id).unwrap().unread_for_agent, 1);
    }

    #[test]
    fn total_unread_sums_across_chats() {
        let store = store();
        let a = store.start_chat(&player("Marco"));
        let b = store.start_chat(&player("Luka"));
        store.send_message(a.id, Role::Player, "1");
        store.send_message(b.id, Role::Player, "2");
        store.send_message(b.id, Role::Player, "3");

        assert_eq!(store.total_unread(Role::Agent), 3);
        assert_eq!(store.total_unread(Role::Player), 0);

        store.mark_chat_as_read(b.id, Role::Agent);
        assert_eq!(store.total_unread(Role::Agent), 1);
    }

    #[test]
    fn agent_hello_scenario() {
        // start chat with P -> agent sends "hello":
        // unread_for_player == 1, unread_for_agent == 0, last_message == "hello".
        let store = store();
        let chat = store.start_chat(&player("Marco"));
        store.send_message(chat.id, Role::Agent, "hello");

        let chat = store.chat(chat.id).unwrap();
        assert_eq!(chat.unread_for_player, 1);
        assert_eq!(chat.unread_for_agent, 0);
        assert_eq!(chat.last_message, "hello");
    }

    #[tokio::test]
    async fn send_message_publishes_message_sent() {
        let store = store();
        let chat = store.start_chat(&player("Marco"));
        let mut rx = store.subscribe();

        store.send_message(chat.id, Role::Agent, "training at 9");

        let event = rx.recv().await.unwrap();
        match event {
            MessagingEvent::MessageSent {
                chat_id,
                sender,
                text,
                ..
            } => {
                assert_eq!(chat_id, chat.id);
                assert_eq!(sender, Role::Agent);
                assert_eq!(text, "training at 9");
            }
            other => panic!("expected MessageSent, got {other:?}"),
        }
    }
}
