use crate::error::{ReminduError, ValidationErrors};
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use remindu_api_structs::create_reminder::{APIResponse, RequestBody};
use remindu_domain::{combine_date_time, parse_date, parse_time, Reminder, ReminderMethod};
use remindu_infra::ReminduContext;

pub async fn create_reminder_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<ReminduContext>,
) -> Result<HttpResponse, ReminduError> {
    let body = body.0;
    let usecase = CreateReminderUseCase {
        date: body.date,
        time: body.time,
        message: body.message,
        reminder_method: body.reminder_method,
    };

    execute(usecase, &ctx)
        .await
        .map(|res| HttpResponse::Created().json(APIResponse::new(res.reminder)))
        .map_err(ReminduError::from)
}

/// Validates the raw create request and persists the `Reminder`.
///
/// The raw `date` and `time` inputs only exist here: they are merged
/// into `reminder_datetime` and are not stored.
#[derive(Debug)]
pub struct CreateReminderUseCase {
    pub date: Option<String>,
    pub time: Option<String>,
    pub message: Option<String>,
    pub reminder_method: Option<String>,
}

#[derive(Debug)]
pub struct UseCaseRes {
    pub reminder: Reminder,
}

#[derive(Debug)]
pub enum UseCaseError {
    StorageError,
    DateMissing,
    TimeMissing,
    MessageMissing,
    ReminderMethodMissing,
    InvalidDate(String),
    InvalidTime(String),
    InvalidDateTimeCombination,
    DateTimeNotInFuture,
    InvalidReminderMethod(String),
}

impl From<UseCaseError> for ReminduError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::StorageError => Self::InternalError,
            UseCaseError::DateMissing => {
                Self::Validation(ValidationErrors::field("date", "Date is required."))
            }
            UseCaseError::TimeMissing => {
                Self::Validation(ValidationErrors::field("time", "Time is required."))
            }
            UseCaseError::MessageMissing => {
                Self::Validation(ValidationErrors::field("message", "Message cannot be empty."))
            }
            UseCaseError::ReminderMethodMissing => Self::Validation(ValidationErrors::field(
                "reminder_method",
                "Reminder method is required.",
            )),
            UseCaseError::InvalidDate(_) => Self::Validation(ValidationErrors::field(
                "date",
                "Date must be in YYYY-MM-DD format.",
            )),
            UseCaseError::InvalidTime(_) => Self::Validation(ValidationErrors::field(
                "time",
                "Time must be in HH:MM format.",
            )),
            UseCaseError::InvalidDateTimeCombination => Self::Validation(
                ValidationErrors::non_field("Invalid date and time combination."),
            ),
            UseCaseError::DateTimeNotInFuture => Self::Validation(ValidationErrors::non_field(
                "Reminder date and time must be in the future.",
            )),
            UseCaseError::InvalidReminderMethod(_) => Self::Validation(ValidationErrors::field(
                "reminder_method",
                format!(
                    "Invalid method. Choose from: {}",
                    ReminderMethod::CHOICES.join(", ")
                ),
            )),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateReminderUseCase {
    type Response = UseCaseRes;
    type Error = UseCaseError;

    const NAME: &'static str = "CreateReminder";

    async fn execute(&mut self, ctx: &ReminduContext) -> Result<Self::Response, Self::Error> {
        let date = match self.date.as_deref().filter(|v| !v.is_empty()) {
            Some(date) => date,
            None => return Err(UseCaseError::DateMissing),
        };
        let time = match self.time.as_deref().filter(|v| !v.is_empty()) {
            Some(time) => time,
            None => return Err(UseCaseError::TimeMissing),
        };
        let message = match self.message.as_deref().filter(|v| !v.is_empty()) {
            Some(message) => message,
            None => return Err(UseCaseError::MessageMissing),
        };
        let reminder_method = match self.reminder_method.as_deref().filter(|v| !v.is_empty()) {
            Some(reminder_method) => reminder_method,
            None => return Err(UseCaseError::ReminderMethodMissing),
        };

        let date = parse_date(date).map_err(|_| UseCaseError::InvalidDate(date.to_string()))?;
        let time = parse_time(time).map_err(|_| UseCaseError::InvalidTime(time.to_string()))?;
        let reminder_datetime =
            combine_date_time(date, time).ok_or(UseCaseError::InvalidDateTimeCombination)?;

        let now = ctx.sys.get_timestamp_millis();
        if reminder_datetime <= now {
            return Err(UseCaseError::DateTimeNotInFuture);
        }

        let reminder_method = reminder_method
            .parse::<ReminderMethod>()
            .map_err(|_| UseCaseError::InvalidReminderMethod(reminder_method.to_string()))?;

        let reminder = Reminder::new(reminder_datetime, message.to_string(), reminder_method, now);

        ctx.repos
            .reminders
            .insert(&reminder)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(UseCaseRes { reminder })
    }
}
