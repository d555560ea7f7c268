mod config;
mod db;
mod entity;
mod error;
mod extract;
mod favorites;
mod response;
mod routes;
mod seed;
#[cfg(test)]
mod test_util;

use actix_web::{middleware, web, App, HttpServer};
use config::AppConfig;
use db::connect_db;
use log::info;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();
    let config = AppConfig::from_env();
    let db = connect_db(&config)
        .await
        .map_err(|e| std::io::Error::other(format!("db connect failed: {}", e)))?;
    if config.seed_sample_data {
        seed::init_sample_data(&db)
            .await
            .map_err(|e| std::io::Error::other(format!("seeding failed: {}", e)))?;
    }

    let server = HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(db.clone()))
            .wrap(middleware::Logger::default())
            .wrap(middleware::from_fn(routes::cors::cors_handler))
            .configure(routes::config)
    })
    .bind((config.server_host.as_str(), config.server_port))?;
    info!(
        "server started at http://{}:{}",
        config.server_host, config.server_port
    );
    server.run().await
}
