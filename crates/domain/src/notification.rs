use crate::date::format_human_date;
use crate::reminder::Reminder;
use chrono_tz::Tz;

/// A ready to send notification for a single `Reminder`
#[derive(Debug, Clone, PartialEq)]
pub struct ReminderMessage {
    pub recipient: String,
    pub subject: String,
    pub html_body: String,
    pub text_body: String,
}

/// Proof of a successful delivery as reported by the delivery channel
#[derive(Debug, Clone, PartialEq)]
pub struct DeliveryReceipt {
    pub message_id: String,
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}

impl ReminderMessage {
    /// Formats the day-of-event notification. The event date is rendered in `tz`.
    pub fn for_reminder(reminder: &Reminder, tz: &Tz) -> Self {
        let event_name = &reminder.event_name;
        let event_type = reminder.event_type.label();
        let date = format_human_date(&reminder.event_date, tz);

        let subject = format!("Reminder: {} is Today!", event_name);

        let text_body = format!(
            "Hello!\n\n\
            This is a friendly reminder that your event \"{name}\" is today!\n\n\
            Event Details:\n\
            Event: {name}\n\
            Type: {event_type}\n\
            Date: {date}\n\n\
            We hope you have a wonderful day!\n\n\
            Best regards,\n\
            Event Reminder System\n",
            name = event_name,
            event_type = event_type,
            date = date,
        );

        let html_body = format!(
            r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto; padding: 20px;">
  <h2>Event Reminder</h2>
  <p>Hello!</p>
  <p>This is a friendly reminder that your event <strong>"{name}"</strong> is today!</p>
  <ul style="list-style-type: none; padding-left: 0;">
    <li><strong>Event:</strong> {name}</li>
    <li><strong>Type:</strong> {event_type}</li>
    <li><strong>Date:</strong> {date}</li>
  </ul>
  <p>We hope you have a wonderful day!</p>
  <p>Best regards,<br>Event Reminder System</p>
</div>"#,
            name = escape_html(event_name),
            event_type = escape_html(event_type),
            date = date,
        );

        Self {
            recipient: reminder.customer_email.clone(),
            subject,
            html_body,
            text_body,
        }
    }
}
