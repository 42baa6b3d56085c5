use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait, Set};

use super::entities::prelude::{Character, Planet};
use super::entities::{character, planet};

/// Inserts the starter characters and planets on an empty database.
/// Users are created out-of-band, so they are never seeded here.
pub async fn seed_reference_data(db: &DatabaseConnection) -> Result<(), sea_orm::DbErr> {
    if Character::find().count(db).await? == 0 {
        Character::insert_many(starter_characters()).exec(db).await?;
        tracing::info!("seeded starter characters");
    }

    if Planet::find().count(db).await? == 0 {
        Planet::insert_many(starter_planets()).exec(db).await?;
        tracing::info!("seeded starter planets");
    }

    Ok(())
}

fn starter_characters() -> Vec<character::ActiveModel> {
    [
        ("Luke Skywalker", "male", 172, 77, "blue"),
        ("Leia Organa", "female", 150, 49, "brown"),
        ("Darth Vader", "male", 202, 136, "yellow"),
        ("Han Solo", "male", 180, 80, "brown"),
        ("Chewbacca", "male", 228, 112, "blue"),
    ]
    .into_iter()
    .map(|(name, gender, height, mass, eye_color)| character::ActiveModel {
        name: Set(name.to_string()),
        gender: Set(gender.to_string()),
        height: Set(height),
        mass: Set(mass),
        eye_color: Set(eye_color.to_string()),
        ..Default::default()
    })
    .collect()
}

fn starter_planets() -> Vec<planet::ActiveModel> {
    [
        ("Tatooine", "200000", "desert", "arid"),
        ("Alderaan", "2000000000", "grasslands, mountains", "temperate"),
        ("Hoth", "unknown", "tundra, ice caves", "frozen"),
        ("Dagobah", "unknown", "swamp, jungles", "murky"),
        ("Bespin", "6000000", "gas giant", "temperate"),
    ]
    .into_iter()
    .map(|(name, population, terrain, climate)| planet::ActiveModel {
        name: Set(name.to_string()),
        population: Set(population.to_string()),
        terrain: Set(terrain.to_string()),
        climate: Set(climate.to_string()),
        ..Default::default()
    })
    .collect()
}
