//! Conversations, unread bookkeeping, and debounced read receipts.

mod read_receipt;
mod store;

pub use read_receipt::ReadReceiptScheduler;
pub use store::MessagingStore;
