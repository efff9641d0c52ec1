use crate::shared::usecase::UseCase;
use event_reminder_domain::{DayWindow, ReminderMessage};
use event_reminder_infra::ReminderContext;
use tracing::{error, info, warn};

/// Emails every unsent reminder whose event falls on the current calendar day
/// and marks the delivered ones as sent. A failed delivery leaves the reminder
/// unsent and does not stop the rest of the run.
#[derive(Debug)]
pub struct SendRemindersUseCase {}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DispatchSummary {
    pub due: usize,
    pub sent: usize,
    pub failed: usize,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for SendRemindersUseCase {
    type Response = DispatchSummary;

    type Error = UseCaseError;

    const NAME: &'static str = "SendReminders";

    async fn execute(&mut self, ctx: &ReminderContext) -> Result<Self::Response, Self::Error> {
        let tz = ctx.config.timezone;
        let today = DayWindow::containing(ctx.sys.now(), &tz);

        let due = ctx
            .repos
            .reminders
            .find_unsent_in(&today)
            .await
            .map_err(|e| {
                error!("Unable to query reminders due today: {:?}", e);
                UseCaseError::StorageError
            })?;

        let mut summary = DispatchSummary {
            due: due.len(),
            ..Default::default()
        };
        info!("Found {} reminders to send", summary.due);

        for reminder in due {
            let message = ReminderMessage::for_reminder(&reminder, &tz);
            let receipt = match ctx.notifier.send(&message).await {
                Ok(receipt) => receipt,
                Err(e) => {
                    error!(
                        "Failed to send reminder {} to {}: {:?}",
                        reminder.id, reminder.customer_email, e
                    );
                    summary.failed += 1;
                    continue;
                }
            };

            match ctx.repos.reminders.mark_sent(&reminder.id).await {
                Ok(true) => {
                    info!(
                        "Reminder {} sent to {} with message id {}",
                        reminder.id, reminder.customer_email, receipt.message_id
                    );
                    summary.sent += 1;
                }
                Ok(false) => {
                    warn!(
                        "Reminder {} was delivered but was already marked as sent",
                        reminder.id
                    );
                    summary.sent += 1;
                }
                Err(e) => {
                    // Delivered, but it will be picked up again on the next run
                    error!(
                        "Reminder {} was delivered but could not be marked as sent: {:?}",
                        reminder.id, e
                    );
                    summary.failed += 1;
                }
            }
        }

        info!(
            "Reminder dispatch finished. Sent: {}, failed: {}",
            summary.sent, summary.failed
        );
        Ok(summary)
    }
}
