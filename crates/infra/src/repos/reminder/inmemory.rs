use super::IReminderRepo;
use crate::repos::shared::inmemory_repo::*;
use event_reminder_domain::{DayWindow, Reminder, ID};

pub struct InMemoryReminderRepo {
    reminders: std::sync::Mutex<Vec<Reminder>>,
}

impl InMemoryReminderRepo {
    pub fn new() -> Self {
        Self {
            reminders: std::sync::Mutex::new(vec![]),
        }
    }
}

#[async_trait::async_trait]
impl IReminderRepo for InMemoryReminderRepo {
    async fn bulk_insert(&self, reminders: &[Reminder]) -> anyhow::Result<()> {
        insert_many(reminders, &self.reminders);
        Ok(())
    }

    async fn find(&self, reminder_id: &ID) -> Option<Reminder> {
        find(reminder_id, &self.reminders)
    }

    async fn find_unsent_in(&self, window: &DayWindow) -> anyhow::Result<Vec<Reminder>> {
        let mut reminders = find_by(&self.reminders, |r| {
            !r.is_reminder_sent && window.contains(&r.event_date)
        });
        reminders.sort_by_key(|r| (r.event_date, r.created_at));
        Ok(reminders)
    }

    async fn mark_sent(&self, reminder_id: &ID) -> anyhow::Result<bool> {
        let updated = update_many(
            &self.reminders,
            |r| r.id == *reminder_id && !r.is_reminder_sent,
            |r| r.is_reminder_sent = true,
        );
        Ok(updated > 0)
    }
}
