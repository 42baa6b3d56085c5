use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};

use super::entities::character;
use super::entities::prelude::Character;

pub async fn list_characters(
    db: &DatabaseConnection,
) -> Result<Vec<character::Model>, sea_orm::DbErr> {
    Character::find()
        .order_by_asc(character::Column::Id)
        .all(db)
        .await
}

pub async fn find_by_id(
    db: &DatabaseConnection,
    id: i32,
) -> Result<Option<character::Model>, sea_orm::DbErr> {
    Character::find_by_id(id).one(db).await
}
