pub mod cors;
pub mod favorite;
pub mod people;
pub mod planet;
pub mod sitemap;
pub mod user;

use actix_web::web;

use crate::response::path_error_handler;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::PathConfig::default().error_handler(path_error_handler))
        .service(web::scope("/people").configure(people::config))
        .service(web::scope("/planets").configure(planet::config))
        .service(web::scope("/users").configure(user::config))
        .service(web::scope("/favorite").configure(favorite::config));
    sitemap::config(cfg);
}
