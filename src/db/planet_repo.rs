use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};

use super::entities::planet;
use super::entities::prelude::Planet;

pub async fn list_planets(db: &DatabaseConnection) -> Result<Vec<planet::Model>, sea_orm::DbErr> {
    Planet::find().order_by_asc(planet::Column::Id).all(db).await
}

pub async fn find_by_id(
    db: &DatabaseConnection,
    id: i32,
) -> Result<Option<planet::Model>, sea_orm::DbErr> {
    Planet::find_by_id(id).one(db).await
}
