mod config;
mod constants;
mod db;
mod errors;
mod handlers;
mod logging;
mod middleware;
mod models;
mod pages;
mod routes;
mod schema;
mod utils;

use actix_web::{web, App, HttpServer};
use diesel::r2d2::{self, ConnectionManager};
use diesel::PgConnection;

use crate::config::Config;
use crate::middleware::session_middleware::SessionMiddlewareFactory;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Ok(path) = dotenv::dotenv() {
        // Print to stderr because logging has not been initialized yet
        eprintln!("Loaded environment from dotenv file {:?}", path);
    }

    logging::init_logger();

    let config = Config::from_env();
    log::info!("Starting server on {}:{}", config.host, config.port);

    // Setup DB pool from DATABASE_URL env
    let manager = ConnectionManager::<PgConnection>::new(config.database_url.clone());
    let pool = r2d2::Pool::builder()
        .max_size(config.pool_size)
        .build(manager)
        .expect("Failed to create DB pool");

    let secret_data = web::Data::new(config.secret_key.clone().into_bytes());

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(pool.clone()))
            .app_data(secret_data.clone())
            .wrap(actix_web::middleware::Logger::default())
            .wrap(SessionMiddlewareFactory)
            .configure(routes::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
