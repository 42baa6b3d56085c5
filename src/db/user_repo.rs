use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use super::entities::prelude::User;
use super::entities::user;

pub async fn list_users(db: &DatabaseConnection) -> Result<Vec<user::Model>, sea_orm::DbErr> {
    User::find().order_by_asc(user::Column::Id).all(db).await
}

pub async fn find_by_id(
    db: &DatabaseConnection,
    id: i32,
) -> Result<Option<user::Model>, sea_orm::DbErr> {
    User::find_by_id(id).one(db).await
}

pub async fn find_by_email(
    db: &DatabaseConnection,
    email: &str,
) -> Result<Option<user::Model>, sea_orm::DbErr> {
    User::find()
        .filter(user::Column::Email.eq(email))
        .one(db)
        .await
}

/// Users are not created through the HTTP API; this is the out-of-band
/// entry point used by operator tooling and tests.
pub async fn create_user(
    db: &DatabaseConnection,
    email: &str,
    password: &str,
    is_active: bool,
) -> Result<user::Model, sea_orm::DbErr> {
    let model = user::ActiveModel {
        email: Set(email.to_string()),
        password: Set(password.to_string()),
        is_active: Set(is_active),
        ..Default::default()
    };
    model.insert(db).await
}
