use crate::reminder::send_reminders::{DispatchSummary, SendRemindersUseCase};
use crate::shared::usecase::execute;
use actix_web::rt::time::sleep;
use chrono::{DateTime, Utc};
use event_reminder_domain::next_daily_run;
use event_reminder_infra::ReminderContext;
use std::time::Duration;
use tracing::info;

pub fn get_start_delay(now: DateTime<Utc>, next_run: DateTime<Utc>) -> Duration {
    (next_run - now).to_std().unwrap_or(Duration::ZERO)
}

/// Runs the reminder dispatch once a day at the configured local time
pub fn start_send_reminders_job(ctx: ReminderContext) {
    actix_web::rt::spawn(async move {
        let mut previous_run: Option<DateTime<Utc>> = None;
        loop {
            let now = ctx.sys.now();
            // Never schedule the same run twice even if the timer fires early
            let after = match previous_run {
                Some(previous_run) if previous_run > now => previous_run,
                _ => now,
            };
            let next_run = next_daily_run(after, &ctx.config.timezone, ctx.config.dispatch_time);
            info!("Next reminder dispatch at {}", next_run);

            sleep(get_start_delay(now, next_run)).await;
            dispatch_due_reminders(&ctx).await;
            previous_run = Some(next_run);
        }
    });
}

/// Sends all reminders due today. Returns `None` if the reminders could not be loaded.
pub async fn dispatch_due_reminders(ctx: &ReminderContext) -> Option<DispatchSummary> {
    execute(SendRemindersUseCase {}, ctx).await.ok()
}
