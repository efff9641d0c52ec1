use super::IReminderRepo;
use chrono::{DateTime, Utc};
use event_reminder_domain::{DayWindow, EventType, Reminder, ID};
use sqlx::{types::Uuid, FromRow, PgPool};
use std::convert::TryFrom;
use tracing::error;

pub struct PostgresReminderRepo {
    pool: PgPool,
}

impl PostgresReminderRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ReminderRaw {
    reminder_uid: Uuid,
    event_name: String,
    event_date: DateTime<Utc>,
    customer_email: String,
    event_type: String,
    other_event_type: Option<String>,
    is_reminder_sent: bool,
    created_at: DateTime<Utc>,
}

impl TryFrom<ReminderRaw> for Reminder {
    type Error = anyhow::Error;

    fn try_from(raw: ReminderRaw) -> Result<Self, Self::Error> {
        let event_type = EventType::from_parts(&raw.event_type, raw.other_event_type.as_deref())?;
        Ok(Reminder {
            id: raw.reminder_uid.into(),
            event_name: raw.event_name,
            event_date: raw.event_date,
            customer_email: raw.customer_email,
            event_type,
            is_reminder_sent: raw.is_reminder_sent,
            created_at: raw.created_at,
        })
    }
}

#[async_trait::async_trait]
impl IReminderRepo for PostgresReminderRepo {
    async fn bulk_insert(&self, reminders: &[Reminder]) -> anyhow::Result<()> {
        let mut tx = self.pool.begin().await?;
        for reminder in reminders {
            sqlx::query(
                r#"
            INSERT INTO reminders
            (reminder_uid, event_name, event_date, customer_email, event_type, other_event_type, is_reminder_sent, created_at)
            VALUES($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
            )
            .bind(*reminder.id.inner_ref())
            .bind(&reminder.event_name)
            .bind(reminder.event_date)
            .bind(&reminder.customer_email)
            .bind(reminder.event_type.kind())
            .bind(reminder.event_type.other_label())
            .bind(reminder.is_reminder_sent)
            .bind(reminder.created_at)
            .execute(&mut *tx)
            .await?;
        }
        tx.commit().await?;
        Ok(())
    }

    async fn find(&self, reminder_id: &ID) -> Option<Reminder> {
        let raw = sqlx::query_as::<_, ReminderRaw>(
            r#"
            SELECT * FROM reminders AS r
            WHERE r.reminder_uid = $1
            "#,
        )
        .bind(*reminder_id.inner_ref())
        .fetch_optional(&self.pool)
        .await;

        match raw {
            Ok(Some(raw)) => match Reminder::try_from(raw) {
                Ok(reminder) => Some(reminder),
                Err(e) => {
                    error!("Stored reminder {} is corrupt: {:?}", reminder_id, e);
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                error!("Find reminder {} failed. DB returned error: {:?}", reminder_id, e);
                None
            }
        }
    }

    async fn find_unsent_in(&self, window: &DayWindow) -> anyhow::Result<Vec<Reminder>> {
        sqlx::query_as::<_, ReminderRaw>(
            r#"
            SELECT * FROM reminders AS r
            WHERE r.event_date >= $1 AND
            r.event_date < $2 AND
            NOT r.is_reminder_sent
            ORDER BY r.event_date, r.created_at
            "#,
        )
        .bind(window.start)
        .bind(window.end)
        .fetch_all(&self.pool)
        .await?
        .into_iter()
        .map(Reminder::try_from)
        .collect()
    }

    async fn mark_sent(&self, reminder_id: &ID) -> anyhow::Result<bool> {
        let res = sqlx::query(
            r#"
            UPDATE reminders
            SET is_reminder_sent = TRUE
            WHERE reminder_uid = $1 AND NOT is_reminder_sent
            "#,
        )
        .bind(*reminder_id.inner_ref())
        .execute(&self.pool)
        .await?;

        Ok(res.rows_affected() > 0)
    }
}
