//! Fixtures shared by the in-crate tests: an isolated in-memory store per test
//! and helpers to insert catalogue rows.

use sea_orm::{ActiveModelTrait, ConnectOptions, Database, DatabaseConnection, Set};

use crate::db::init_schema;
use crate::entity::{character, planet, user};

pub async fn setup_db() -> DatabaseConnection {
    let mut opts = ConnectOptions::new("sqlite::memory:".to_string());
    opts.max_connections(1).min_connections(1).sqlx_logging(false);
    let db = Database::connect(opts).await.unwrap();
    init_schema(&db).await.unwrap();
    db
}

pub async fn insert_user(db: &DatabaseConnection, username: &str) -> user::Model {
    user::ActiveModel {
        username: Set(username.to_string()),
        email: Set(format!("{}@rebellion.org", username)),
        password: Set("x".to_string()),
        firstname: Set(None),
        lastname: Set(None),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap()
}

pub async fn insert_planet(db: &DatabaseConnection, name: &str) -> planet::Model {
    planet::ActiveModel {
        name: Set(name.to_string()),
        climate: Set(Some("temperate".to_string())),
        terrain: Set(Some("grasslands".to_string())),
        population: Set(Some(1_000)),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap()
}

pub async fn insert_character(db: &DatabaseConnection, name: &str) -> character::Model {
    character::ActiveModel {
        name: Set(name.to_string()),
        species: Set(Some("Human".to_string())),
        homeworld: Set(Some("Tatooine".to_string())),
        affiliation: Set(Some("Rebel Alliance".to_string())),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap()
}

/// Builds the full application around `$db` for `actix_web::test` calls.
macro_rules! test_app {
    ($db:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::new($db.clone()))
                .wrap(actix_web::middleware::from_fn($crate::routes::cors::cors_handler))
                .configure($crate::routes::config),
        )
        .await
    };
}

pub(crate) use test_app;
