mod date;
mod notification;
mod reminder;
mod shared;
mod validation;

pub use chrono_tz::Tz;
pub use date::{format_human_date, next_daily_run, parse_event_date, DayWindow};
pub use notification::{DeliveryReceipt, ReminderMessage};
pub use reminder::{EventType, InvalidEventTypeError, NewReminder, Reminder};
pub use shared::entity::{Entity, InvalidIDError, ID};
pub use validation::{
    is_valid_email, validate_batch, ReminderCandidate, ValidationError, MAX_REMINDERS_PER_BATCH,
};
