//! Local notification dispatch.
//!
//! The messaging store publishes `MessageSent` events; `LocalNotifier`
//! subscribes and forwards each one to a [`NotificationSink`] as a
//! (title, body, delay) alert. The store never learns whether a
//! notification was delivered -- dispatch is fire-and-forget by design
//! of the collaborator contract.

use std::sync::Arc;
use std::time::Duration;

use scoutline_core::messaging::MessagingStore;
use scoutline_types::event::MessagingEvent;
use tokio::sync::broadcast::error::RecvError;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Accepts a local alert. Implementations decide how (or whether) to show it.
pub trait NotificationSink: Send + Sync + 'static {
    fn dispatch(&self, title: &str, body: &str, delay: Duration);
}

/// Sink that records alerts in the structured log. Default for the demo.
#[derive(Debug, Default)]
pub struct TracingSink;

impl NotificationSink for TracingSink {
    fn dispatch(&self, title: &str, body: &str, delay: Duration) {
        info!(title, body, delay_ms = delay.as_millis() as u64, "local notification");
    }
}

/// Background task translating messaging events into local alerts.
///
/// The alert title is the sender's role display name and the body is the
/// message text, as in the source app.
pub struct LocalNotifier {
    handle: JoinHandle<()>,
}

impl LocalNotifier {
    /// Subscribe to the store and start dispatching.
    ///
    /// `delay` is passed through to the sink (the source scheduled its
    /// local alerts a moment after the send).
    pub fn spawn(store: &MessagingStore, sink: Arc<dyn NotificationSink>, delay: Duration) -> Self {
        let mut rx = store.subscribe();
        let handle = tokio::spawn(async move {
            loop {
                match rx.recv().await {
                    Ok(MessagingEvent::MessageSent { sender, text, .. }) => {
                        sink.dispatch(sender.display_name(), &text, delay);
                    }
                    Ok(_) => {}
                    Err(RecvError::Lagged(missed)) => {
                        warn!(missed, "notifier lagged behind the event bus");
                    }
                    Err(RecvError::Closed) => {
                        debug!("event bus closed, notifier stopping");
                        break;
                    }
                }
            }
        });
        Self { handle }
    }

    /// Stop dispatching. Teardown hook; safe to call once.
    pub fn shutdown(self) {
        self.handle.abort();
    }
}
