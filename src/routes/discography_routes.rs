use actix_web::web;

use crate::handlers::discography_handlers::{
    add_album, add_track, album_page, delete_album, delete_track, discography_page,
};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/discography", web::get().to(discography_page))
        .route("/add_album", web::post().to(add_album))
        .route("/album/{album_id}", web::get().to(album_page))
        .route("/add_track/{album_id}", web::post().to(add_track))
        .route("/delete_album/{album_id}", web::post().to(delete_album))
        .route("/delete_track/{track_id}", web::post().to(delete_track));
}
