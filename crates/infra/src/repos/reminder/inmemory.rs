use super::IReminderRepo;
use remindu_domain::{Entity, Reminder, ID};
use std::sync::Mutex;

/// Reminder repository backed by a `Mutex<Vec>`. Used by tests so that
/// they do not need a running database.
pub struct InMemoryReminderRepo {
    reminders: Mutex<Vec<Reminder>>,
}

impl InMemoryReminderRepo {
    pub fn new() -> Self {
        Self {
            reminders: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IReminderRepo for InMemoryReminderRepo {
    async fn insert(&self, reminder: &Reminder) -> anyhow::Result<()> {
        let mut reminders = self.reminders.lock().unwrap();
        reminders.push(reminder.clone());
        Ok(())
    }

    async fn save(&self, reminder: &Reminder) -> anyhow::Result<()> {
        let mut reminders = self.reminders.lock().unwrap();
        for stored in reminders.iter_mut() {
            if stored.id() == reminder.id() {
                *stored = reminder.clone();
            }
        }
        Ok(())
    }

    async fn find(&self, reminder_id: &ID) -> Option<Reminder> {
        let reminders = self.reminders.lock().unwrap();
        reminders.iter().find(|r| r.id() == reminder_id).cloned()
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Reminder>> {
        let mut reminders = self.reminders.lock().unwrap().clone();
        reminders.sort_by(|a, b| b.reminder_datetime.cmp(&a.reminder_datetime));
        Ok(reminders)
    }
}
