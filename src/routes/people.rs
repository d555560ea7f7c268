use actix_web::{web, HttpResponse};
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};
use serde::Serialize;

use crate::entity::character;
use crate::error::AppError;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("").route(web::get().to(list)))
        .service(web::resource("/{id}").route(web::get().to(get_person)));
}

#[derive(Serialize)]
struct PersonDto {
    name: String,
    species: Option<String>,
    homeworld: Option<String>,
    affiliation: Option<String>,
}

async fn list(db: web::Data<DatabaseConnection>) -> Result<HttpResponse, AppError> {
    let names = character::Entity::find()
        .order_by_asc(character::Column::Id)
        .all(db.get_ref())
        .await?
        .into_iter()
        .map(|c| c.name)
        .collect::<Vec<_>>();
    Ok(HttpResponse::Ok().json(names))
}

async fn get_person(
    db: web::Data<DatabaseConnection>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let model = character::Entity::find_by_id(path.into_inner())
        .one(db.get_ref())
        .await?
        .ok_or_else(|| AppError::not_found("Character not found"))?;
    Ok(HttpResponse::Ok().json(PersonDto {
        name: model.name,
        species: model.species,
        homeworld: model.homeworld,
        affiliation: model.affiliation,
    }))
}
