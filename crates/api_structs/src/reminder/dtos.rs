use chrono::{DateTime, Utc};
use event_reminder_domain::{Reminder, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReminderDTO {
    pub id: ID,
    pub event_name: String,
    pub event_date: DateTime<Utc>,
    pub customer_email: String,
    pub event_type: String,
    pub other_event_type: Option<String>,
    pub is_reminder_sent: bool,
    pub created_at: DateTime<Utc>,
}

impl ReminderDTO {
    pub fn new(reminder: Reminder) -> Self {
        Self {
            id: reminder.id,
            event_type: reminder.event_type.kind().to_string(),
            other_event_type: reminder.event_type.other_label().map(String::from),
            event_name: reminder.event_name,
            event_date: reminder.event_date,
            customer_email: reminder.customer_email,
            is_reminder_sent: reminder.is_reminder_sent,
            created_at: reminder.created_at,
        }
    }
}
