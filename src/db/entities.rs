#[allow(unused_imports)]
pub mod prelude {
    pub use super::character::Entity as Character;
    pub use super::favorite_character::Entity as FavoriteCharacter;
    pub use super::favorite_planet::Entity as FavoritePlanet;
    pub use super::planet::Entity as Planet;
    pub use super::user::Entity as User;
}

pub mod user {
    use sea_orm::entity::prelude::*;

    #[sea_orm::model]
    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "users")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,
        #[sea_orm(unique)]
        pub email: String,
        pub password: String,
        pub is_active: bool,
        #[sea_orm(has_many)]
        pub favorite_characters: HasMany<super::favorite_character::Entity>,
        #[sea_orm(has_many)]
        pub favorite_planets: HasMany<super::favorite_planet::Entity>,
    }

    impl ActiveModelBehavior for ActiveModel {}
}

pub mod character {
    use sea_orm::entity::prelude::*;

    #[sea_orm::model]
    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "characters")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,
        pub name: String,
        pub gender: String,
        pub height: i32,
        pub mass: i32,
        pub eye_color: String,
        #[sea_orm(has_many)]
        pub favorited_by: HasMany<super::favorite_character::Entity>,
    }

    impl ActiveModelBehavior for ActiveModel {}
}

pub mod planet {
    use sea_orm::entity::prelude::*;

    #[sea_orm::model]
    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "planets")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,
        pub name: String,
        pub population: String,
        pub terrain: String,
        pub climate: String,
        #[sea_orm(has_many)]
        pub favorited_by: HasMany<super::favorite_planet::Entity>,
    }

    impl ActiveModelBehavior for ActiveModel {}
}

pub mod favorite_character {
    use sea_orm::entity::prelude::*;

    #[sea_orm::model]
    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "favorite_characters")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,
        #[sea_orm(indexed)]
        pub user_id: i32,
        #[sea_orm(indexed)]
        pub character_id: i32,
        #[sea_orm(belongs_to, from = "user_id", to = "id", on_delete = "Cascade")]
        pub user: HasOne<super::user::Entity>,
        #[sea_orm(belongs_to, from = "character_id", to = "id", on_delete = "Cascade")]
        pub character: HasOne<super::character::Entity>,
    }

    impl ActiveModelBehavior for ActiveModel {}
}

pub mod favorite_planet {
    use sea_orm::entity::prelude::*;

    #[sea_orm::model]
    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "favorite_planets")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,
        #[sea_orm(indexed)]
        pub user_id: i32,
        #[sea_orm(indexed)]
        pub planet_id: i32,
        #[sea_orm(belongs_to, from = "user_id", to = "id", on_delete = "Cascade")]
        pub user: HasOne<super::user::Entity>,
        #[sea_orm(belongs_to, from = "planet_id", to = "id", on_delete = "Cascade")]
        pub planet: HasOne<super::planet::Entity>,
    }

    impl ActiveModelBehavior for ActiveModel {}
}
