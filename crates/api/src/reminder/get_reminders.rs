use crate::error::ReminduError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use remindu_api_structs::dtos::ReminderDTO;
use remindu_api_structs::get_reminders::APIResponse;
use remindu_domain::Reminder;
use remindu_infra::ReminduContext;

pub async fn get_reminders_controller(
    ctx: web::Data<ReminduContext>,
) -> Result<HttpResponse, ReminduError> {
    let usecase = GetRemindersUseCase {};

    execute(usecase, &ctx)
        .await
        .map(|res| {
            let reminders: APIResponse = res.reminders.into_iter().map(ReminderDTO::new).collect();
            HttpResponse::Ok().json(reminders)
        })
        .map_err(ReminduError::from)
}

#[derive(Debug)]
pub struct GetRemindersUseCase {}

#[derive(Debug)]
pub struct UseCaseRes {
    pub reminders: Vec<Reminder>,
}

#[derive(Debug)]
pub enum UseCaseError {
    StorageError,
}

impl From<UseCaseError> for ReminduError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetRemindersUseCase {
    type Response = UseCaseRes;
    type Error = UseCaseError;

    const NAME: &'static str = "GetReminders";

    async fn execute(&mut self, ctx: &ReminduContext) -> Result<Self::Response, Self::Error> {
        let reminders = ctx
            .repos
            .reminders
            .find_all()
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(UseCaseRes { reminders })
    }
}
