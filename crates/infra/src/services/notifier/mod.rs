mod email_api;
mod inmemory;
mod logging;

pub use email_api::EmailApiNotifier;
use event_reminder_domain::{DeliveryReceipt, ReminderMessage};
pub use inmemory::InMemoryNotifier;
pub use logging::LogNotifier;

/// Delivers `ReminderMessage`s to their recipient
#[async_trait::async_trait]
pub trait INotifier: Send + Sync {
    async fn send(&self, message: &ReminderMessage) -> anyhow::Result<DeliveryReceipt>;
}
