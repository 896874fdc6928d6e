use actix_web::web;

use crate::handlers::about_handlers::{about_page, add_about_comment};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/about", web::get().to(about_page))
        .route("/add_about_comment", web::post().to(add_about_comment));
}
