use crate::shared::entity::{Entity, ID};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;
use thiserror::Error;

/// A `Reminder` is a persisted request to notify someone at
/// `reminder_datetime` over the given `ReminderMethod`. This service only
/// stores the request, delivery is owned by downstream consumers.
#[derive(Debug, Clone)]
pub struct Reminder {
    pub id: ID,
    /// The timestamp in millis at which the notification should happen.
    /// Derived from the date and time given by the client and always in
    /// the future at the time this `Reminder` is created.
    pub reminder_datetime: i64,
    pub message: String,
    pub reminder_method: ReminderMethod,
    pub created_at: i64,
    /// Same as `created_at` until the `Reminder` is mutated.
    pub updated_at: i64,
}

impl Reminder {
    pub fn new(
        reminder_datetime: i64,
        message: String,
        reminder_method: ReminderMethod,
        now: i64,
    ) -> Self {
        Self {
            id: Default::default(),
            reminder_datetime,
            message,
            reminder_method,
            created_at: now,
            updated_at: now,
        }
    }
}

impl Entity for Reminder {
    fn id(&self) -> &ID {
        &self.id
    }
}

/// The channel over which a `Reminder` should be delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReminderMethod {
    Email,
    Sms,
}

impl ReminderMethod {
    pub const CHOICES: [&'static str; 2] = ["EMAIL", "SMS"];
}

#[derive(Error, Debug)]
pub enum InvalidReminderMethodError {
    #[error("Reminder method: {0} is not supported")]
    Unsupported(String),
}

impl FromStr for ReminderMethod {
    type Err = InvalidReminderMethodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "EMAIL" => Ok(Self::Email),
            "SMS" => Ok(Self::Sms),
            _ => Err(InvalidReminderMethodError::Unsupported(s.to_string())),
        }
    }
}

impl Display for ReminderMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Email => write!(f, "EMAIL"),
            Self::Sms => write!(f, "SMS"),
        }
    }
}
