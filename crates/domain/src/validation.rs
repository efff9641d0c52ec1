use crate::date::parse_event_date;
use crate::reminder::{EventType, InvalidEventTypeError, NewReminder};
use chrono_tz::Tz;
use regex::Regex;
use std::sync::OnceLock;
use thiserror::Error;

/// How many reminders a single submission may contain
pub const MAX_REMINDERS_PER_BATCH: usize = 3;

/// A reminder exactly as submitted by a client. Every field is optional
/// so that a missing value can be reported as such.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReminderCandidate {
    pub event_name: Option<String>,
    pub event_date: Option<String>,
    pub customer_email: Option<String>,
    pub event_type: Option<String>,
    pub other_event_type: Option<String>,
}

#[derive(Error, Debug, PartialEq)]
pub enum ValidationError {
    #[error("Invalid reminder data")]
    InvalidBatch,
    #[error("A maximum of {} reminders can be submitted at once", MAX_REMINDERS_PER_BATCH)]
    TooManyReminders,
    #[error("All required fields must be provided")]
    MissingRequiredField,
    #[error("Invalid email format")]
    InvalidEmail,
    #[error("Invalid event type")]
    InvalidEventType,
    #[error("Please specify the other event type")]
    MissingOtherEventType,
    #[error("Invalid event date")]
    InvalidEventDate,
}

fn email_regex() -> &'static Regex {
    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    EMAIL_REGEX.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Email regex to be valid")
    })
}

pub fn is_valid_email(email: &str) -> bool {
    email_regex().is_match(email)
}

fn required(value: &Option<String>) -> Result<&str, ValidationError> {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ValidationError::MissingRequiredField),
    }
}

impl ReminderCandidate {
    /// Validates a single candidate. Rules are checked in a fixed order and
    /// the first one that fails is reported.
    pub fn validate(&self, tz: &Tz) -> Result<NewReminder, ValidationError> {
        let event_name = required(&self.event_name)?;
        let event_date = required(&self.event_date)?;
        let customer_email = required(&self.customer_email)?;
        let event_type = required(&self.event_type)?;

        // The pattern applies to the submitted value, surrounding whitespace included
        if !self.customer_email.as_deref().map_or(false, is_valid_email) {
            return Err(ValidationError::InvalidEmail);
        }

        let event_type = EventType::from_parts(event_type, self.other_event_type.as_deref())
            .map_err(|e| match e {
                InvalidEventTypeError::Unknown(_) => ValidationError::InvalidEventType,
                InvalidEventTypeError::MissingOtherLabel => ValidationError::MissingOtherEventType,
            })?;

        let event_date =
            parse_event_date(event_date, tz).ok_or(ValidationError::InvalidEventDate)?;

        Ok(NewReminder {
            event_name: event_name.to_string(),
            event_date,
            customer_email: customer_email.to_string(),
            event_type,
        })
    }
}

/// Validates a whole submission. Either every candidate is valid and all of
/// them are returned, or the first error is returned and nothing else.
pub fn validate_batch(
    candidates: &[ReminderCandidate],
    tz: &Tz,
) -> Result<Vec<NewReminder>, ValidationError> {
    if candidates.is_empty() {
        return Err(ValidationError::InvalidBatch);
    }
    if candidates.len() > MAX_REMINDERS_PER_BATCH {
        return Err(ValidationError::TooManyReminders);
    }

    candidates.iter().map(|c| c.validate(tz)).collect()
}
