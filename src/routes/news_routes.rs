use actix_web::web;

use crate::handlers::news_handlers::{add_news, delete_news, news_page};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(news_page))
        .route("/news", web::get().to(news_page))
        .route("/add_news", web::post().to(add_news))
        .route("/delete_news/{news_id}", web::get().to(delete_news));
}
