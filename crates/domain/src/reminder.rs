use crate::shared::entity::{Entity, ID};
use chrono::{DateTime, Utc};
use std::{fmt::Display, str::FromStr};
use thiserror::Error;

/// What kind of event a `Reminder` is about.
///
/// `Other` carries the user supplied label, so a `Reminder` of kind `Other`
/// always knows what to call itself in the notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventType {
    Birthday,
    Anniversary,
    Other(String),
}

impl EventType {
    pub const BIRTHDAY: &'static str = "Birthday";
    pub const ANNIVERSARY: &'static str = "Anniversary";
    pub const OTHER: &'static str = "Other";

    /// Builds an `EventType` from its stored / wire representation which
    /// keeps the kind and the custom label in two separate fields.
    pub fn from_parts(kind: &str, other: Option<&str>) -> Result<Self, InvalidEventTypeError> {
        match kind {
            Self::BIRTHDAY => Ok(Self::Birthday),
            Self::ANNIVERSARY => Ok(Self::Anniversary),
            Self::OTHER => match other.map(str::trim) {
                Some(label) if !label.is_empty() => Ok(Self::Other(label.to_string())),
                _ => Err(InvalidEventTypeError::MissingOtherLabel),
            },
            unknown => Err(InvalidEventTypeError::Unknown(unknown.to_string())),
        }
    }

    /// The kind, i.e. `Birthday`, `Anniversary` or `Other`
    pub fn kind(&self) -> &str {
        match self {
            Self::Birthday => Self::BIRTHDAY,
            Self::Anniversary => Self::ANNIVERSARY,
            Self::Other(_) => Self::OTHER,
        }
    }

    /// The custom label, only present for `Other`
    pub fn other_label(&self) -> Option<&str> {
        match self {
            Self::Other(label) => Some(label),
            _ => None,
        }
    }

    /// The name used when talking about the event to a human
    pub fn label(&self) -> &str {
        match self {
            Self::Other(label) => label,
            kind => kind.kind(),
        }
    }
}

impl Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum InvalidEventTypeError {
    #[error("Unknown event type: {0}")]
    Unknown(String),
    #[error("Event type Other requires a label")]
    MissingOtherLabel,
}

impl FromStr for EventType {
    type Err = InvalidEventTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_parts(s, None)
    }
}

/// A validated reminder which has not been persisted yet
#[derive(Debug, Clone, PartialEq)]
pub struct NewReminder {
    pub event_name: String,
    pub event_date: DateTime<Utc>,
    pub customer_email: String,
    pub event_type: EventType,
}

/// A `Reminder` pairs an event with the email address that should be
/// notified on the day the event takes place.
#[derive(Debug, Clone, PartialEq)]
pub struct Reminder {
    pub id: ID,
    pub event_name: String,
    /// The instant the event starts at
    pub event_date: DateTime<Utc>,
    pub customer_email: String,
    pub event_type: EventType,
    /// Flipped to `true` once, after the notification has been delivered
    pub is_reminder_sent: bool,
    pub created_at: DateTime<Utc>,
}

impl Reminder {
    pub fn new(reminder: NewReminder, created_at: DateTime<Utc>) -> Self {
        Self {
            id: Default::default(),
            event_name: reminder.event_name,
            event_date: reminder.event_date,
            customer_email: reminder.customer_email,
            event_type: reminder.event_type,
            is_reminder_sent: false,
            created_at,
        }
    }
}

impl Entity for Reminder {
    fn id(&self) -> &ID {
        &self.id
    }
}
