mod inmemory;
mod postgres;

pub use inmemory::InMemoryReminderRepo;
pub use postgres::PostgresReminderRepo;

use event_reminder_domain::{DayWindow, Reminder, ID};

#[async_trait::async_trait]
pub trait IReminderRepo: Send + Sync {
    /// Inserts all `reminders` or none of them
    async fn bulk_insert(&self, reminders: &[Reminder]) -> anyhow::Result<()>;
    async fn find(&self, reminder_id: &ID) -> Option<Reminder>;
    /// Reminders with an `event_date` inside `window` which have not been sent yet,
    /// ordered by `event_date` and then `created_at`
    async fn find_unsent_in(&self, window: &DayWindow) -> anyhow::Result<Vec<Reminder>>;
    /// Marks the reminder as sent. Returns `false` if there was no unsent
    /// reminder with the given id.
    async fn mark_sent(&self, reminder_id: &ID) -> anyhow::Result<bool>;
}
