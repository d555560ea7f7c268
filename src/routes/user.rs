use actix_web::{web, HttpResponse};
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};

use crate::entity::user;
use crate::error::AppError;
use crate::extract::UserId;
use crate::favorites;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("").route(web::get().to(list_users)))
        .service(web::resource("/favorites").route(web::get().to(list_favorites)));
}

async fn list_users(db: web::Data<DatabaseConnection>) -> Result<HttpResponse, AppError> {
    let names = user::Entity::find()
        .order_by_asc(user::Column::Id)
        .all(db.get_ref())
        .await?
        .into_iter()
        .map(|u| u.username)
        .collect::<Vec<_>>();
    Ok(HttpResponse::Ok().json(names))
}

async fn list_favorites(
    db: web::Data<DatabaseConnection>,
    user_id: UserId,
) -> Result<HttpResponse, AppError> {
    let user = user::Entity::find_by_id(user_id.0)
        .one(db.get_ref())
        .await?
        .ok_or_else(|| AppError::not_found("User not found"))?;
    let list = favorites::list_for_user(db.get_ref(), user.id).await?;
    Ok(HttpResponse::Ok().json(list))
}
