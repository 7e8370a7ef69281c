use remindu_domain::{Reminder, ReminderMethod, ID};
use serde::{Deserialize, Serialize};

/// Published shape of a `Reminder`. Field names are part of the API
/// contract, timestamps are UTC millis.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ReminderDTO {
    pub id: ID,
    pub reminder_datetime: i64,
    pub message: String,
    pub reminder_method: ReminderMethod,
    pub created_at: i64,
    pub updated_at: i64,
}

impl ReminderDTO {
    pub fn new(reminder: Reminder) -> Self {
        Self {
            id: reminder.id.clone(),
            reminder_datetime: reminder.reminder_datetime,
            message: reminder.message,
            reminder_method: reminder.reminder_method,
            created_at: reminder.created_at,
            updated_at: reminder.updated_at,
        }
    }
}
