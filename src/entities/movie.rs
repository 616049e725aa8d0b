use sea_orm::entity::prelude::*;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "movies")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub tagline: String,
    pub description: String,
    pub poster: String,
    pub year: u16,
    pub country: String,
    pub world_premiere: Date,
    pub budget: u32,
    pub fees_in_usa: u32,
    pub fees_in_world: u32,
    pub category_id: Option<i32>,
    #[sea_orm(unique)]
    pub url: String,
    pub draft: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::category::Entity",
        from = "Column::CategoryId",
        to = "super::category::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    Category,
    #[sea_orm(has_many = "super::movie_director::Entity")]
    MovieDirectors,
    #[sea_orm(has_many = "super::movie_actor::Entity")]
    MovieActors,
    #[sea_orm(has_many = "super::movie_genre::Entity")]
    MovieGenres,
    #[sea_orm(has_many = "super::movie_shot::Entity")]
    MovieShots,
    #[sea_orm(has_many = "super::rating::Entity")]
    Ratings,
    #[sea_orm(has_many = "super::review::Entity")]
    Reviews,
}

impl Related<super::category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
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

impl Related<super::movie_genre::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MovieGenres.def()
    }
}

impl Related<super::movie_shot::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MovieShots.def()
    }
}

impl Related<super::rating::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Ratings.def()
    }
}

impl Related<super::review::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reviews.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
