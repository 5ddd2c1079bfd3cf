//! Composition root.
//!
//! The source app reached its managers through process-wide lazy
//! singletons. Here every service is constructed explicitly, wired
//! together once, and handed to the UI layer; `shutdown` is the matching
//! teardown point (pending read receipts cancelled, notifier stopped).

use std::sync::Arc;
use std::time::Duration;

use scoutline_core::event::EventBus;
use scoutline_core::messaging::{MessagingStore, ReadReceiptScheduler};
use scoutline_core::session::SessionManager;
use scoutline_types::config::AppConfig;
use scoutline_types::error::DirectoryError;
use scoutline_types::identity::PlayerProfile;

use crate::directory::InMemoryDirectory;
use crate::notify::{LocalNotifier, NotificationSink, TracingSink};
use crate::seed;

/// The fully wired app core, ready for a UI layer.
pub struct AppServices {
    pub sessions: SessionManager<InMemoryDirectory>,
    pub messaging: MessagingStore,
    pub read_receipts: ReadReceiptScheduler,
    /// Seeded roster, for roster browsing and starting demo chats.
    pub roster: Vec<PlayerProfile>,
    notifier: LocalNotifier,
}

impl AppServices {
    /// Build and wire every service, seeding the demo data.
    ///
    /// Uses the tracing-backed notification sink; [`Self::build_with_sink`]
    /// lets tests substitute their own.
    pub async fn build(config: &AppConfig) -> Result<Self, DirectoryError> {
        Self::build_with_sink(config, Arc::new(TracingSink)).await
    }

    pub async fn build_with_sink(
        config: &AppConfig,
        sink: Arc<dyn NotificationSink>,
    ) -> Result<Self, DirectoryError> {
        let directory = InMemoryDirectory::new();
        let roster = seed::seed_directory(&directory).await?;

        let events = EventBus::new(config.event_capacity);
        let messaging = MessagingStore::new(events);
        let read_receipts = ReadReceiptScheduler::new(
            messaging.clone(),
            Duration::from_millis(config.read_receipt_delay_ms),
        );
        let notifier = LocalNotifier::spawn(
            &messaging,
            sink,
            Duration::from_millis(config.notification_delay_ms),
        );
        let sessions = SessionManager::new(directory, config);

        Ok(Self {
            sessions,
            messaging,
            read_receipts,
            roster,
            notifier,
        })
    }

    /// Tear down background work: cancel pending read receipts and stop
    /// the notifier.
    pub fn shutdown(self) {
        self.read_receipts.shutdown();
        self.notifier.shutdown();
    }
}
