use super::INotifier;
use event_reminder_domain::{DeliveryReceipt, ReminderMessage};
use std::sync::Mutex;

/// Records every message it is asked to deliver. Deliveries to the
/// recipients in `failing_recipients` fail, the rest succeed.
pub struct InMemoryNotifier {
    sent: Mutex<Vec<ReminderMessage>>,
    failing_recipients: Mutex<Vec<String>>,
}

impl InMemoryNotifier {
    pub fn new() -> Self {
        Self {
            sent: Mutex::new(vec![]),
            failing_recipients: Mutex::new(vec![]),
        }
    }

    pub fn fail_deliveries_to(&self, recipient: &str) {
        self.failing_recipients
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(recipient.to_string());
    }

    /// Messages which were delivered successfully, in delivery order
    pub fn sent_messages(&self) -> Vec<ReminderMessage> {
        self.sent
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl Default for InMemoryNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl INotifier for InMemoryNotifier {
    async fn send(&self, message: &ReminderMessage) -> anyhow::Result<DeliveryReceipt> {
        let fails = self
            .failing_recipients
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .contains(&message.recipient);
        if fails {
            anyhow::bail!("Delivery to {} failed", message.recipient);
        }

        let mut sent = self
            .sent
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        sent.push(message.clone());
        Ok(DeliveryReceipt {
            message_id: format!("inmemory-{}", sent.len()),
        })
    }
}
