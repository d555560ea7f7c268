use actix_web::{web, HttpResponse};
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};
use serde::Serialize;

use crate::entity::planet;
use crate::error::AppError;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("").route(web::get().to(list)))
        .service(web::resource("/{id}").route(web::get().to(get_planet)));
}

#[derive(Serialize)]
struct PlanetDto {
    name: String,
    climate: Option<String>,
    terrain: Option<String>,
    population: Option<i64>,
}

impl From<planet::Model> for PlanetDto {
    fn from(model: planet::Model) -> Self {
        Self {
            name: model.name,
            climate: model.climate,
            terrain: model.terrain,
            population: model.population,
        }
    }
}

async fn list(db: web::Data<DatabaseConnection>) -> Result<HttpResponse, AppError> {
    let names = planet::Entity::find()
        .order_by_asc(planet::Column::Id)
        .all(db.get_ref())
        .await?
        .into_iter()
        .map(|p| p.name)
        .collect::<Vec<_>>();
    Ok(HttpResponse::Ok().json(names))
}

async fn get_planet(
    db: web::Data<DatabaseConnection>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let model = planet::Entity::find_by_id(path.into_inner())
        .one(db.get_ref())
        .await?
        .ok_or_else(|| AppError::not_found("Planet not found"))?;
    Ok(HttpResponse::Ok().json(PlanetDto::from(model)))
}
