use crate::{APIResponse, BaseClient};
use event_reminder_api_structs::create_reminders::{self, ReminderInput};
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct ReminderClient {
    base: Arc<BaseClient>,
}

pub struct CreateRemindersInput {
    pub reminders: Vec<ReminderInput>,
}

impl ReminderClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn create(
        &self,
        input: CreateRemindersInput,
    ) -> APIResponse<create_reminders::APIResponse> {
        let body = create_reminders::RequestBody {
            reminders: Some(input.reminders),
        };
        self.base
            .post(body, "reminders".into(), StatusCode::CREATED)
            .await
    }
}
