use crate::error::ReminderError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use event_reminder_api_structs::create_reminders::*;
use event_reminder_domain::{validate_batch, Reminder, ReminderCandidate, ValidationError};
use event_reminder_infra::ReminderContext;
use tracing::{error, info};

pub async fn create_reminders_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<ReminderContext>,
) -> Result<HttpResponse, ReminderError> {
    let usecase = CreateRemindersUseCase {
        reminders: body
            .0
            .reminders
            .unwrap_or_default()
            .into_iter()
            .map(ReminderCandidate::from)
            .collect(),
    };

    execute(usecase, &ctx)
        .await
        .map(|reminders| HttpResponse::Created().json(APIResponse::new(reminders)))
        .map_err(ReminderError::from)
}

/// Validates a batch of reminders and stores all of them, or none of them
#[derive(Debug)]
pub struct CreateRemindersUseCase {
    pub reminders: Vec<ReminderCandidate>,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    InvalidReminders(ValidationError),
    StorageError,
}

impl From<UseCaseError> for ReminderError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::InvalidReminders(e) => Self::BadClientData(e.to_string()),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateRemindersUseCase {
    type Response = Vec<Reminder>;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateReminders";

    async fn execute(&mut self, ctx: &ReminderContext) -> Result<Self::Response, Self::Error> {
        let reminders = validate_batch(&self.reminders, &ctx.config.timezone)
            .map_err(UseCaseError::InvalidReminders)?;

        let created_at = ctx.sys.now();
        let reminders = reminders
            .into_iter()
            .map(|r| Reminder::new(r, created_at))
            .collect::<Vec<_>>();

        ctx.repos
            .reminders
            .bulk_insert(&reminders)
            .await
            .map_err(|e| {
                error!("Unable to store reminders: {:?}", e);
                UseCaseError::StorageError
            })?;

        info!("Created {} reminders", reminders.len());
        Ok(reminders)
    }
}
