use crate::dtos::ReminderDTO;
use serde::Deserialize;

pub mod create_reminder {
    use super::*;

    /// All fields are optional at the deserialization layer so that a
    /// missing field surfaces as a field level validation error instead
    /// of a deserialization failure.
    #[derive(Debug, Deserialize)]
    pub struct RequestBody {
        pub date: Option<String>,
        pub time: Option<String>,
        pub message: Option<String>,
        pub reminder_method: Option<String>,
    }

    pub type APIResponse = ReminderDTO;
}

pub mod get_reminders {
    use super::*;

    pub type APIResponse = Vec<ReminderDTO>;
}
