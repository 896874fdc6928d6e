pub mod about_routes;
pub mod auth_routes;
pub mod concert_routes;
pub mod discography_routes;
pub mod favorite_routes;
pub mod news_routes;
pub mod review_routes;
pub mod site_routes;

use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig) {
    about_routes::configure(cfg);
    auth_routes::configure(cfg);
    concert_routes::configure(cfg);
    discography_routes::configure(cfg);
    favorite_routes::configure(cfg);
    news_routes::configure(cfg);
    review_routes::configure(cfg);
    site_routes::configure(cfg);
}
