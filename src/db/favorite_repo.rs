use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use super::entities::prelude::{FavoriteCharacter, FavoritePlanet};
use super::entities::{favorite_character, favorite_planet};

pub async fn characters_for_user(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<Vec<favorite_character::Model>, sea_orm::DbErr> {
    FavoriteCharacter::find()
        .filter(favorite_character::Column::UserId.eq(user_id))
        .order_by_asc(favorite_character::Column::Id)
        .all(db)
        .await
}

pub async fn planets_for_user(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<Vec<favorite_planet::Model>, sea_orm::DbErr> {
    FavoritePlanet::find()
        .filter(favorite_planet::Column::UserId.eq(user_id))
        .order_by_asc(favorite_planet::Column::Id)
        .all(db)
        .await
}

pub async fn add_character(
    db: &DatabaseConnection,
    user_id: i32,
    character_id: i32,
) -> Result<favorite_character::Model, sea_orm::DbErr> {
    let model = favorite_character::ActiveModel {
        user_id: Set(user_id),
        character_id: Set(character_id),
        ..Default::default()
    };
    model.insert(db).await
}

pub async fn add_planet(
    db: &DatabaseConnection,
    user_id: i32,
    planet_id: i32,
) -> Result<favorite_planet::Model, sea_orm::DbErr> {
    let model = favorite_planet::ActiveModel {
        user_id: Set(user_id),
        planet_id: Set(planet_id),
        ..Default::default()
    };
    model.insert(db).await
}

/// Removes the first favorite row matching `character_id`, regardless of
/// which user owns it. When several users favorited the same character the
/// choice is arbitrary; the row is only scoped by the character column.
pub async fn remove_first_for_character(
    db: &DatabaseConnection,
    character_id: i32,
) -> Result<bool, sea_orm::DbErr> {
    let Some(favorite) = FavoriteCharacter::find()
        .filter(favorite_character::Column::CharacterId.eq(character_id))
        .one(db)
        .await?
    else {
        return Ok(false);
    };
    let result = FavoriteCharacter::delete_by_id(favorite.id).exec(db).await?;
    Ok(result.rows_affected > 0)
}

/// Same single-column contract as `remove_first_for_character`.
pub async fn remove_first_for_planet(
    db: &DatabaseConnection,
    planet_id: i32,
) -> Result<bool, sea_orm::DbErr> {
    let Some(favorite) = FavoritePlanet::find()
        .filter(favorite_planet::Column::PlanetId.eq(planet_id))
        .one(db)
        .await?
    else {
        return Ok(false);
    };
    let result = FavoritePlanet::delete_by_id(favorite.id).exec(db).await?;
    Ok(result.rows_affected > 0)
}
