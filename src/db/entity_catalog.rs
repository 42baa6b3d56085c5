//! Static table/column metadata for external tooling (schema inspectors,
//! migration helpers). Kept in sync with `entities` by hand.

#[derive(Debug, Clone, Copy)]
pub struct EntityColumnInfo {
    pub name: &'static str,
    pub rust_type: &'static str,
    pub attributes: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct EntityInfo {
    pub entity: &'static str,
    pub table: &'static str,
    pub columns: &'static [EntityColumnInfo],
}

const ENTITIES: &[EntityInfo] = &[
    EntityInfo {
        entity: "user",
        table: "users",
        columns: &[
            EntityColumnInfo {
                name: "id",
                rust_type: "i32",
                attributes: "primary_key, auto_increment",
            },
            EntityColumnInfo {
                name: "email",
                rust_type: "String",
                attributes: "unique",
            },
            EntityColumnInfo {
                name: "password",
                rust_type: "String",
                attributes: "",
            },
            EntityColumnInfo {
                name: "is_active",
                rust_type: "bool",
                attributes: "",
            },
        ],
    },
    EntityInfo {
        entity: "character",
        table: "characters",
        columns: &[
            EntityColumnInfo {
                name: "id",
                rust_type: "i32",
                attributes: "primary_key, auto_increment",
            },
            EntityColumnInfo {
                name: "name",
                rust_type: "String",
                attributes: "",
            },
            EntityColumnInfo {
                name: "gender",
                rust_type: "String",
                attributes: "",
            },
            EntityColumnInfo {
                name: "height",
                rust_type: "i32",
                attributes: "",
            },
            EntityColumnInfo {
                name: "mass",
                rust_type: "i32",
                attributes: "",
            },
            EntityColumnInfo {
                name: "eye_color",
                rust_type: "String",
                attributes: "",
            },
        ],
    },
    EntityInfo {
        entity: "planet",
        table: "planets",
        columns: &[
            EntityColumnInfo {
                name: "id",
                rust_type: "i32",
                attributes: "primary_key, auto_increment",
            },
            EntityColumnInfo {
                name: "name",
                rust_type: "String",
                attributes: "",
            },
            EntityColumnInfo {
                name: "population",
                rust_type: "String",
                attributes: "",
            },
            EntityColumnInfo {
                name: "terrain",
                rust_type: "String",
                attributes: "",
            },
            EntityColumnInfo {
                name: "climate",
                rust_type: "String",
                attributes: "",
            },
        ],
    },
    EntityInfo {
        entity: "favorite_character",
        table: "favorite_characters",
        columns: &[
            EntityColumnInfo {
                name: "id",
                rust_type: "i32",
                attributes: "primary_key, auto_increment",
            },
            EntityColumnInfo {
                name: "user_id",
                rust_type: "i32",
                attributes: "indexed, fk -> users.id",
            },
            EntityColumnInfo {
                name: "character_id",
                rust_type: "i32",
                attributes: "indexed, fk -> characters.id",
            },
        ],
    },
    EntityInfo {
        entity: "favorite_planet",
        table: "favorite_planets",
        columns: &[
            EntityColumnInfo {
                name: "id",
                rust_type: "i32",
                attributes: "primary_key, auto_increment",
            },
            EntityColumnInfo {
                name: "user_id",
                rust_type: "i32",
                attributes: "indexed, fk -> users.id",
            },
            EntityColumnInfo {
                name: "planet_id",
                rust_type: "i32",
                attributes: "indexed, fk -> planets.id",
            },
        ],
    },
];

pub fn entities() -> &'static [EntityInfo] {
    ENTITIES
}
