use actix_web::web;

use crate::handlers::review_handlers::{add_review, delete_review};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/add_review", web::post().to(add_review))
        .route("/delete_review/{review_id}", web::get().to(delete_review));
}
