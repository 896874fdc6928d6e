use actix_web::web;

use crate::handlers::site_handlers::{home_page, site_info_page};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/home", web::get().to(home_page))
        .route("/site-info", web::get().to(site_info_page));
}
