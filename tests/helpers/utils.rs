use chrono::{DateTime, Utc};
use event_reminder_sdk::ReminderInput;

pub fn format_date(dt: &DateTime<Utc>) -> String {
    // https://docs.rs/chrono/0.4.19/chrono/format/strftime/index.html
    // 2001-07-08
    dt.format("%F").to_string()
}

pub fn birthday(event_name: &str, event_date: &str, customer_email: &str) -> ReminderInput {
    ReminderInput {
        event_name: Some(event_name.into()),
        event_date: Some(event_date.into()),
        customer_email: Some(customer_email.into()),
        event_type: Some("Birthday".into()),
        other_event_type: None,
    }
}
