//! Debounced, cancellable "mark as read on view appear".
//!
//! When a conversation view becomes visible the UI schedules a delayed
//! mark-as-read; if the view disappears before the delay elapses the UI
//! cancels it, so a chat the user only glanced at is not marked read.
//! Each chat id has at most one pending task; re-scheduling replaces it.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use dashmap::DashMap;
use scoutline_types::identity::Role;
use tokio_util::sync::CancellationToken;
use tracing::debug;
use uuid::Uuid;

use super::store::MessagingStore;

struct PendingRead {
    seq: u64,
    token: CancellationToken,
}

/// Schedules delayed mark-as-read actions, keyed by chat id.
///
/// Cloning produces a shared view of the same pending set. `shutdown`
/// cancels everything still pending; the scheduler has no other teardown.
#[derive(Clone)]
pub struct ReadReceiptScheduler {
    store: MessagingStore,
    delay: Duration,
    pending: Arc<DashMap<Uuid, PendingRead>>,
    next_seq: Arc<AtomicU64>,
}

impl ReadReceiptScheduler {
    pub fn new(store: MessagingStore, delay: Duration) -> Self {
        Self {
            store,
            delay,
            pending: Arc::new(DashMap::new()),
            next_seq: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Start (or restart) the debounce for a chat.
    ///
    /// After the configured delay, `role`'s unread counter on the chat is
    /// zeroed -- unless [`cancel`](Self::cancel) runs first or the chat is
    /// scheduled again, which replaces the pending task.
    pub fn schedule(&self, chat_id: Uuid, role: Role) {
        let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);
        let token = CancellationToken::new();

        if let Some(previous) = self.pending.insert(
            chat_id,
            PendingRead {
                seq,
                token: token.clone(),
            },
        ) {
            previous.token.cancel();
        }

        let store = self.store.clone();
        let pending = Arc::clone(&self.pending);
        let delay = self.delay;
        tokio::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {
                    debug!(chat_id = %chat_id, "read receipt cancelled");
                }
                _ = tokio::time::sleep(delay) => {
                    store.mark_chat_as_read(chat_id, role);
                }
            }
            // Remove only our own entry; a replacement task owns a newer seq.
            pending.remove_if(&chat_id, |_, p| p.seq == seq);
        });
    }

    /// Cancel the pending mark-as-read for a chat, if any.
    ///
    /// Guaranteed: once this returns, a task scheduled before the call
    /// will not mark the chat read.
    pub fn cancel(&self, chat_id: Uuid) {
        if let Some((_, p)) = self.pending.remove(&chat_id) {
            p.token.cancel();
        }
    }

    /// Cancel every pending mark-as-read. Teardown hook.
    pub fn shutdown(&self) {
        for entry in self.pending.iter() {
            entry.value().token.cancel();
        }
        self.pending.clear();
    }

    /// Whether a mark-as-read is currently pending for this chat.
    pub fn is_pending(&self, chat_id: Uuid) -> bool {
        self.pending.contains_key(&chat_id)
    }
}
