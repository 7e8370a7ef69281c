use super::IReminderRepo;
use remindu_domain::{Reminder, ReminderMethod, ID};
use sqlx::{types::Uuid, FromRow, PgPool};
use tracing::error;

pub struct PostgresReminderRepo {
    pool: PgPool,
}

impl PostgresReminderRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ReminderRaw {
    reminder_uid: Uuid,
    reminder_datetime: i64,
    message: String,
    reminder_method: String,
    created_at: i64,
    updated_at: i64,
}

impl From<ReminderRaw> for Reminder {
    fn from(e: ReminderRaw) -> Self {
        Self {
            id: e.reminder_uid.into(),
            reminder_datetime: e.reminder_datetime,
            message: e.message,
            // The column has a CHECK constraint on the supported methods
            reminder_method: e.reminder_method.parse::<ReminderMethod>().unwrap(),
            created_at: e.created_at,
            updated_at: e.updated_at,
        }
    }
}

#[async_trait::async_trait]
impl IReminderRepo for PostgresReminderRepo {
    async fn insert(&self, reminder: &Reminder) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO reminders(reminder_uid, reminder_datetime, message, reminder_method, created_at, updated_at)
            VALUES($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(reminder.id.inner_ref())
        .bind(reminder.reminder_datetime)
        .bind(&reminder.message)
        .bind(reminder.reminder_method.to_string())
        .bind(reminder.created_at)
        .bind(reminder.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn save(&self, reminder: &Reminder) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            UPDATE reminders
            SET reminder_datetime = $2,
            message = $3,
            reminder_method = $4,
            updated_at = $5
            WHERE reminder_uid = $1
            "#,
        )
        .bind(reminder.id.inner_ref())
        .bind(reminder.reminder_datetime)
        .bind(&reminder.message)
        .bind(reminder.reminder_method.to_string())
        .bind(reminder.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!("Unable to update reminder: {:?}", e);
            e
        })?;

        Ok(())
    }

    async fn find(&self, reminder_id: &ID) -> Option<Reminder> {
        let reminder: ReminderRaw = match sqlx::query_as(
            r#"
            SELECT * FROM reminders
            WHERE reminder_uid = $1
            "#,
        )
        .bind(reminder_id.inner_ref())
        .fetch_one(&self.pool)
        .await
        {
            Ok(reminder) => reminder,
            Err(_) => return None,
        };
        Some(reminder.into())
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Reminder>> {
        let reminders: Vec<ReminderRaw> = sqlx::query_as(
            r#"
            SELECT * FROM reminders
            ORDER BY reminder_datetime DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(reminders.into_iter().map(|r| r.into()).collect())
    }
}
