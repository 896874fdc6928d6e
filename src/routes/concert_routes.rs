use actix_web::web;

use crate::handlers::concert_handlers::{add_concert, concerts_page};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/concerts", web::get().to(concerts_page))
        .route("/add_concert", web::post().to(add_concert));
}
