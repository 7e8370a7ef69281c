mod date;
mod reminder;
mod shared;

pub use date::{combine_date_time, parse_date, parse_time};
pub use reminder::{InvalidReminderMethodError, Reminder, ReminderMethod};
pub use shared::entity::{Entity, ID};
