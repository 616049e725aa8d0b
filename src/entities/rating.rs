use sea_orm::entity::prelude::*;
use serde::Serialize;

// No uniqueness over (ip, movie_id): the schema permits repeat votes from
// the same address.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "ratings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub ip: String,
    pub star_id: i32,
    pub movie_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::rating_star::Entity",
        from = "Column::StarId",
        to = "super::rating_star::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Star,
    #[sea_orm(
        belongs_to = "super::movie::Entity",
        from = "Column::MovieId",
        to = "super::movie::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Movie,
}

impl Related<super::rating_star::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Star.def()
    }
}

impl Related<super::movie::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Movie.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
