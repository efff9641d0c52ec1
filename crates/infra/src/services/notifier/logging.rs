use super::INotifier;
use event_reminder_domain::{DeliveryReceipt, ReminderMessage, ID};
use tracing::info;

/// Notifier used when no email api is configured. It only logs the reminder.
pub struct LogNotifier {}

#[async_trait::async_trait]
impl INotifier for LogNotifier {
    async fn send(&self, message: &ReminderMessage) -> anyhow::Result<DeliveryReceipt> {
        let message_id = ID::new().as_string();
        info!(
            recipient = %message.recipient,
            subject = %message.subject,
            message_id = %message_id,
            "Email delivery is not configured, logging reminder instead"
        );
        Ok(DeliveryReceipt { message_id })
    }
}
