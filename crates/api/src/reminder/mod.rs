mod create_reminders;
pub mod send_reminders;

use actix_web::web;
use create_reminders::create_reminders_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/reminders", web::post().to(create_reminders_controller));
}
