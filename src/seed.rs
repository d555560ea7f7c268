use log::info;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, Set};

use crate::entity::{character, planet};

const PLANETS: &[(&str, &str, &str, Option<i64>)] = &[
    ("Tatooine", "arid", "desert", Some(200_000)),
    ("Alderaan", "temperate", "grasslands, mountains", Some(2_000_000_000)),
    ("Hoth", "frozen", "tundra, ice caves, mountain ranges", None),
    ("Dagobah", "murky", "swamp, jungles", None),
    ("Bespin", "temperate", "gas giant", Some(6_000_000)),
    ("Endor", "temperate", "forests, mountains, lakes", Some(30_000_000)),
    ("Naboo", "temperate", "grassy hills, swamps, forests, mountains", Some(4_500_000_000)),
    ("Coruscant", "temperate", "cityscape, mountains", Some(1_000_000_000_000)),
];

const CHARACTERS: &[(&str, &str, &str, &str)] = &[
    ("Luke Skywalker", "Human", "Tatooine", "Rebel Alliance"),
    ("Leia Organa", "Human", "Alderaan", "Rebel Alliance"),
    ("Han Solo", "Human", "Corellia", "Rebel Alliance"),
    ("Chewbacca", "Wookiee", "Kashyyyk", "Rebel Alliance"),
    ("Yoda", "Yoda's species", "Unknown", "Jedi Order"),
    ("Darth Vader", "Human", "Tatooine", "Galactic Empire"),
    ("Obi-Wan Kenobi", "Human", "Stewjon", "Jedi Order"),
    ("R2-D2", "Droid", "Naboo", "Rebel Alliance"),
];

/// Fills the catalogue tables with a small sample set when both are empty.
/// Users are never seeded.
pub async fn init_sample_data(db: &DatabaseConnection) -> Result<(), DbErr> {
    let planets = planet::Entity::find().count(db).await?;
    let characters = character::Entity::find().count(db).await?;
    if planets > 0 || characters > 0 {
        info!("catalogue already populated, skipping sample data");
        return Ok(());
    }

    planet::Entity::insert_many(PLANETS.iter().map(|(name, climate, terrain, population)| {
        planet::ActiveModel {
            name: Set(name.to_string()),
            climate: Set(Some(climate.to_string())),
            terrain: Set(Some(terrain.to_string())),
            population: Set(*population),
            ..Default::default()
        }
    }))
    .exec(db)
    .await?;

    character::Entity::insert_many(CHARACTERS.iter().map(
        |(name, species, homeworld, affiliation)| character::ActiveModel {
            name: Set(name.to_string()),
            species: Set(Some(species.to_string())),
            homeworld: Set(Some(homeworld.to_string())),
            affiliation: Set(Some(affiliation.to_string())),
            ..Default::default()
        },
    ))
    .exec(db)
    .await?;

    info!(
        "seeded {} planets and {} characters",
        PLANETS.len(),
        CHARACTERS.len()
    );
    Ok(())
}
