use sea_orm::entity::prelude::*;
use serde::Serialize;

// One table for both directors and actors; the two movie join tables decide
// which role a person plays in a given film.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "actors")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub age: u16,
    pub description: String,
    pub image: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::movie_director::Entity")]
    MovieDirectors,
    #[sea_orm(has_many = "super::movie_actor::Entity")]
    MovieActors,
}

impl Related<super::movie_director::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MovieDirectors.def()
    }
}

impl Related<super::movie_actor::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MovieActors.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
