use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, ModelTrait,
    QueryFilter, QueryOrder, SqlErr,
};
use serde::Serialize;

use crate::entity::favorite::{self, FavoriteTarget};
use crate::entity::{character, planet};
use crate::error::AppError;

/// One entry of a user's favorites, serialized as `{"planet": name}` or `{"character": name}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FavoriteDto {
    Planet(String),
    Character(String),
}

/// Favorites of a user in insertion order, with each target loaded through the
/// favorite's `belongs_to` relations. Rows whose target cannot be resolved are skipped.
pub async fn list_for_user(db: &DatabaseConnection, user_id: i32) -> Result<Vec<FavoriteDto>, DbErr> {
    let with_planets = favorite::Entity::find()
        .filter(favorite::Column::UserId.eq(user_id))
        .order_by_asc(favorite::Column::Id)
        .find_also_related(planet::Entity)
        .all(db)
        .await?;
    let with_characters = favorite::Entity::find()
        .filter(favorite::Column::UserId.eq(user_id))
        .order_by_asc(favorite::Column::Id)
        .find_also_related(character::Entity)
        .all(db)
        .await?;

    let list = with_planets
        .into_iter()
        .zip(with_characters)
        .filter_map(|((row, planet), (_, character))| match row.target()? {
            FavoriteTarget::Planet(_) => planet.map(|p| FavoriteDto::Planet(p.name)),
            FavoriteTarget::Character(_) => character.map(|c| FavoriteDto::Character(c.name)),
        })
        .collect();
    Ok(list)
}

pub async fn find(
    db: &DatabaseConnection,
    user_id: i32,
    target: FavoriteTarget,
) -> Result<Option<favorite::Model>, DbErr> {
    favorite::Entity::find()
        .filter(target.condition(user_id))
        .order_by_asc(favorite::Column::Id)
        .one(db)
        .await
}

/// Inserts a favorite. An existing row for the same target is a conflict,
/// whether seen up front or reported by the unique constraint on insert.
pub async fn add(
    db: &DatabaseConnection,
    user_id: i32,
    target: FavoriteTarget,
) -> Result<favorite::Model, AppError> {
    if find(db, user_id, target).await?.is_some() {
        return Err(duplicate(target));
    }
    target.new_row(user_id).insert(db).await.map_err(|err| {
        if let Some(SqlErr::UniqueConstraintViolation(_)) = err.sql_err() {
            duplicate(target)
        } else {
            AppError::from(err)
        }
    })
}

/// Deletes the first favorite matching the target. Returns `false` when there is none.
pub async fn remove(
    db: &DatabaseConnection,
    user_id: i32,
    target: FavoriteTarget,
) -> Result<bool, DbErr> {
    match find(db, user_id, target).await? {
        Some(row) => {
            row.delete(db).await?;
            Ok(true)
        }
        None => Ok(false),
    }
}

fn duplicate(target: FavoriteTarget) -> AppError {
    match target {
        FavoriteTarget::Planet(_) => AppError::conflict("Planet is already a favorite"),
        FavoriteTarget::Character(_) => AppError::conflict("Character is already a favorite"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::{insert_character, insert_planet, insert_user, setup_db};

    #[test]
    fn dto_shape() {
        let json = serde_json::to_value(vec![
            FavoriteDto::Planet("Tatooine".into()),
            FavoriteDto::Character("Yoda".into()),
        ])
        .unwrap();
        assert_eq!(
            json,
            serde_json::json!([{ "planet": "Tatooine" }, { "character": "Yoda" }])
        );
    }

    #[actix_web::test]
    async fn lists_in_insertion_order() {
        let db = setup_db().await;
        let user = insert_user(&db, "luke").await;
        let hoth = insert_planet(&db, "Hoth").await;
        let yoda = insert_character(&db, "Yoda").await;
        let dagobah = insert_planet(&db, "Dagobah").await;

        add(&db, user.id, FavoriteTarget::Planet(dagobah.id)).await.unwrap();
        add(&db, user.id, FavoriteTarget::Character(yoda.id)).await.unwrap();
        add(&db, user.id, FavoriteTarget::Planet(hoth.id)).await.unwrap();

        assert_eq!(
            list_for_user(&db, user.id).await.unwrap(),
            vec![
                FavoriteDto::Planet("Dagobah".into()),
                FavoriteDto::Character("Yoda".into()),
                FavoriteDto::Planet("Hoth".into()),
            ]
        );
    }

    #[actix_web::test]
    async fn targets_resolve_through_their_own_relation() {
        let db = setup_db().await;
        let user = insert_user(&db, "luke").await;
        let naboo = insert_planet(&db, "Naboo").await;
        let padme = insert_character(&db, "Padme Amidala").await;
        assert_eq!(naboo.id, padme.id);

        add(&db, user.id, FavoriteTarget::Character(padme.id)).await.unwrap();
        add(&db, user.id, FavoriteTarget::Planet(naboo.id)).await.unwrap();

        assert_eq!(
            list_for_user(&db, user.id).await.unwrap(),
            vec![
                FavoriteDto::Character("Padme Amidala".into()),
                FavoriteDto::Planet("Naboo".into()),
            ]
        );
    }

    #[actix_web::test]
    async fn only_lists_own_favorites() {
        let db = setup_db().await;
        let luke = insert_user(&db, "luke").await;
        let leia = insert_user(&db, "leia").await;
        let alderaan = insert_planet(&db, "Alderaan").await;

        add(&db, leia.id, FavoriteTarget::Planet(alderaan.id)).await.unwrap();

        assert!(list_for_user(&db, luke.id).await.unwrap().is_empty());
        assert_eq!(list_for_user(&db, leia.id).await.unwrap().len(), 1);
    }

    #[actix_web::test]
    async fn duplicate_add_is_conflict() {
        let db = setup_db().await;
        let user = insert_user(&db, "luke").await;
        let yoda = insert_character(&db, "Yoda").await;

        add(&db, user.id, FavoriteTarget::Character(yoda.id)).await.unwrap();
        let err = add(&db, user.id, FavoriteTarget::Character(yoda.id))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Conflict(_)));
        assert_eq!(favorite::Entity::find().all(&db).await.unwrap().len(), 1);
    }

    #[actix_web::test]
    async fn unique_constraint_rejects_raw_duplicate() {
        let db = setup_db().await;
        let user = insert_user(&db, "luke").await;
        let hoth = insert_planet(&db, "Hoth").await;

        FavoriteTarget::Planet(hoth.id).new_row(user.id).insert(&db).await.unwrap();
        let err = FavoriteTarget::Planet(hoth.id)
            .new_row(user.id)
            .insert(&db)
            .await
            .unwrap_err();

        assert!(matches!(
            err.sql_err(),
            Some(SqlErr::UniqueConstraintViolation(_))
        ));
    }

    #[actix_web::test]
    async fn remove_reports_missing_row() {
        let db = setup_db().await;
        let user = insert_user(&db, "luke").await;
        let hoth = insert_planet(&db, "Hoth").await;
        add(&db, user.id, FavoriteTarget::Planet(hoth.id)).await.unwrap();

        assert!(remove(&db, user.id, FavoriteTarget::Planet(hoth.id)).await.unwrap());
        assert!(!remove(&db, user.id, FavoriteTarget::Planet(hoth.id)).await.unwrap());
    }

    #[actix_web::test]
    async fn referenced_planet_cannot_be_deleted() {
        let db = setup_db().await;
        let user = insert_user(&db, "luke").await;
        let alderaan = insert_planet(&db, "Alderaan").await;
        add(&db, user.id, FavoriteTarget::Planet(alderaan.id)).await.unwrap();

        assert!(planet::Entity::delete_by_id(alderaan.id).exec(&db).await.is_err());
        assert_eq!(
            list_for_user(&db, user.id).await.unwrap(),
            vec![FavoriteDto::Planet("Alderaan".into())]
        );
    }
}
