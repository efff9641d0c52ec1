mod base;
mod reminder;
mod status;

pub(crate) use base::BaseClient;
pub use base::{APIError, APIResponse};
pub use event_reminder_api_structs::create_reminders::ReminderInput;
pub use event_reminder_api_structs::dtos::ReminderDTO as Reminder;
pub use event_reminder_domain::ID;
use reminder::ReminderClient;
pub use reminder::CreateRemindersInput;
use status::StatusClient;
use std::sync::Arc;

/// Event Reminder Server SDK
///
/// The SDK contains methods for interacting with the Event Reminder server
/// API.
#[derive(Clone)]
pub struct ReminderSDK {
    pub reminder: ReminderClient,
    pub status: StatusClient,
}

impl ReminderSDK {
    pub fn new(address: String) -> Self {
        let base = Arc::new(BaseClient::new(format!("{}/api", address)));
        let reminder = ReminderClient::new(base.clone());
        let status = StatusClient::new(base);

        Self { reminder, status }
    }
}
