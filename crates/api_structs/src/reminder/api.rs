use crate::dtos::ReminderDTO;
use event_reminder_domain::{Reminder, ReminderCandidate};
use serde::{Deserialize, Serialize};

pub mod create_reminders {
    use super::*;

    /// A single reminder in a submission. Everything is optional here so that
    /// missing fields are reported by validation instead of by deserialization.
    #[derive(Debug, Clone, Default, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ReminderInput {
        #[serde(default)]
        pub event_name: Option<String>,
        #[serde(default)]
        pub event_date: Option<String>,
        #[serde(default)]
        pub customer_email: Option<String>,
        #[serde(default)]
        pub event_type: Option<String>,
        #[serde(default)]
        pub other_event_type: Option<String>,
    }

    impl From<ReminderInput> for ReminderCandidate {
        fn from(input: ReminderInput) -> Self {
            Self {
                event_name: input.event_name,
                event_date: input.event_date,
                customer_email: input.customer_email,
                event_type: input.event_type,
                other_event_type: input.other_event_type,
            }
        }
    }

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        #[serde(default)]
        pub reminders: Option<Vec<ReminderInput>>,
    }

    pub const SUCCESS_MESSAGE: &str = "Reminders created successfully";

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub success: bool,
        pub message: String,
        pub data: Vec<ReminderDTO>,
    }

    impl APIResponse {
        pub fn new(reminders: Vec<Reminder>) -> Self {
            Self {
                success: true,
                message: SUCCESS_MESSAGE.into(),
                data: reminders.into_iter().map(ReminderDTO::new).collect(),
            }
        }
    }
}
