use actix_web::web;

use crate::handlers::favorite_handlers::{add_favorite, favorites_page};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/favorites", web::get().to(favorites_page))
        .route("/add_to_favorite", web::post().to(add_favorite));
}
