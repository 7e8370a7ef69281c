use actix_web::web;

mod create_reminder;
mod get_reminders;

use create_reminder::create_reminder_controller;
use get_reminders::get_reminders_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/reminders/", web::post().to(create_reminder_controller));
    cfg.route("/reminders/", web::get().to(get_reminders_controller));
}
