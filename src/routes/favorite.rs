use actix_web::{web, HttpResponse};
use log::info;
use sea_orm::{DatabaseConnection, EntityTrait};

use crate::entity::favorite::FavoriteTarget;
use crate::entity::{character, planet, user};
use crate::error::AppError;
use crate::extract::UserId;
use crate::favorites;
use crate::response::message;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/planet/{id}")
            .route(web::post().to(add_planet))
            .route(web::delete().to(delete_planet)),
    )
    .service(
        web::resource("/people/{id}")
            .route(web::post().to(add_person))
            .route(web::delete().to(delete_person)),
    );
}

async fn add_planet(
    db: web::Data<DatabaseConnection>,
    user_id: UserId,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let db = db.get_ref();
    let user = user::Entity::find_by_id(user_id.0).one(db).await?;
    let planet = planet::Entity::find_by_id(path.into_inner()).one(db).await?;
    let (Some(user), Some(planet)) = (user, planet) else {
        return Err(AppError::not_found("User or Planet not found"));
    };

    favorites::add(db, user.id, FavoriteTarget::Planet(planet.id)).await?;
    info!("user {} added planet {} to favorites", user.id, planet.id);
    Ok(message("Favorite planet added successfully"))
}

async fn add_person(
    db: web::Data<DatabaseConnection>,
    user_id: UserId,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let db = db.get_ref();
    let user = user::Entity::find_by_id(user_id.0).one(db).await?;
    let character = character::Entity::find_by_id(path.into_inner()).one(db).await?;
    let (Some(user), Some(character)) = (user, character) else {
        return Err(AppError::not_found("User or Character not found"));
    };

    favorites::add(db, user.id, FavoriteTarget::Character(character.id)).await?;
    info!("user {} added character {} to favorites", user.id, character.id);
    Ok(message("Favorite character added successfully"))
}

async fn delete_planet(
    db: web::Data<DatabaseConnection>,
    user_id: UserId,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    remove(db.get_ref(), user_id, FavoriteTarget::Planet(path.into_inner())).await?;
    Ok(message("Favorite planet deleted successfully"))
}

async fn delete_person(
    db: web::Data<DatabaseConnection>,
    user_id: UserId,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    remove(db.get_ref(), user_id, FavoriteTarget::Character(path.into_inner())).await?;
    Ok(message("Favorite character deleted successfully"))
}

/// The user is resolved before the favorite lookup, so an unknown user is a 404.
async fn remove(
    db: &DatabaseConnection,
    user_id: UserId,
    target: FavoriteTarget,
) -> Result<(), AppError> {
    let user = user::Entity::find_by_id(user_id.0)
        .one(db)
        .await?
        .ok_or_else(|| AppError::not_found("User or Favorite not found"))?;
    if !favorites::remove(db, user.id, target).await? {
        return Err(AppError::not_found("User or Favorite not found"));
    }
    info!("user {} removed favorite {:?}", user.id, target);
    Ok(())
}
