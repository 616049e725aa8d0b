use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Categories::Table)
                    .if_not_exists()
                    .col(pk_auto(Categories::Id))
                    .col(string_len(Categories::Name, 255))
                    .col(string_len(Categories::Description, 255))
                    .col(string_len_uniq(Categories::Url, 155))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Actors::Table)
                    .if_not_exists()
                    .col(pk_auto(Actors::Id))
                    .col(string_len(Actors::Name, 255))
                    .col(small_unsigned(Actors::Age).default(0))
                    .col(string_len(Actors::Description, 2255))
                    .col(string(Actors::Image))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Genres::Table)
                    .if_not_exists()
                    .col(pk_auto(Genres::Id))
                    .col(string_len(Genres::Name, 255))
                    .col(string_len(Genres::Description, 255))
                    .col(string_len_uniq(Genres::Url, 155))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Movies::Table)
                    .if_not_exists()
                    .col(pk_auto(Movies::Id))
                    .col(string_len(Movies::Title, 255))
                    .col(string_len(Movies::Tagline, 255).default(""))
                    .col(string_len(Movies::Description, 2255))
                    .col(string(Movies::Poster))
                    .col(small_unsigned(Movies::Year).default(2000))
                    .col(string_len(Movies::Country, 155))
                    .col(date(Movies::WorldPremiere))
                    .col(unsigned(Movies::Budget).default(0))
                    .col(unsigned(Movies::FeesInUsa).default(0))
                    .col(unsigned(Movies::FeesInWorld).default(0))
                    .col(integer_null(Movies::CategoryId))
                    .col(string_len_uniq(Movies::Url, 155))
                    .col(boolean(Movies::Draft).default(false))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_movies_category_id")
                            .from(Movies::Table, Movies::CategoryId)
                            .to(Categories::Table, Categories::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(MovieDirectors::Table)
                    .if_not_exists()
                    .col(integer(MovieDirectors::MovieId))
                    .col(integer(MovieDirectors::ActorId))
                    .primary_key(
                        Index::create()
                            .col(MovieDirectors::MovieId)
                            .col(MovieDirectors::ActorId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_movie_directors_movie_id")
                            .from(MovieDirectors::Table, MovieDirectors::MovieId)
                            .to(Movies::Table, Movies::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_movie_directors_actor_id")
                            .from(MovieDirectors::Table, MovieDirectors::ActorId)
                            .to(Actors::Table, Actors::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(MovieActors::Table)
                    .if_not_exists()
                    .col(integer(MovieActors::MovieId))
                    .col(integer(MovieActors::ActorId))
                    .primary_key(
                        Index::create().col(MovieActors::MovieId).col(MovieActors::ActorId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_movie_actors_movie_id")
                            .from(MovieActors::Table, MovieActors::MovieId)
                            .to(Movies::Table, Movies::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_movie_actors_actor_id")
                            .from(MovieActors::Table, MovieActors::ActorId)
                            .to(Actors::Table, Actors::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(MovieGenres::Table)
                    .if_not_exists()
                    .col(integer(MovieGenres::MovieId))
                    .col(integer(MovieGenres::GenreId))
                    .primary_key(
                        Index::create().col(MovieGenres::MovieId).col(MovieGenres::GenreId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_movie_genres_movie_id")
                            .from(MovieGenres::Table, MovieGenres::MovieId)
                            .to(Movies::Table, Movies::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_movie_genres_genre_id")
                            .from(MovieGenres::Table, MovieGenres::GenreId)
                            .to(Genres::Table, Genres::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(MovieShots::Table)
                    .if_not_exists()
                    .col(pk_auto(MovieShots::Id))
                    .col(string_len(MovieShots::Title, 255))
                    .col(string_len(MovieShots::Description, 255))
                    .col(string(MovieShots::Image))
                    .col(integer(MovieShots::MovieId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_movie_shots_movie_id")
                            .from(MovieShots::Table, MovieShots::MovieId)
                            .to(Movies::Table, Movies::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(RatingStars::Table)
                    .if_not_exists()
                    .col(pk_auto(RatingStars::Id))
                    .col(small_unsigned(RatingStars::Value).default(0))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Ratings::Table)
                    .if_not_exists()
                    .col(pk_auto(Ratings::Id))
                    .col(string_len(Ratings::Ip, 55))
                    .col(integer(Ratings::StarId))
                    .col(integer(Ratings::MovieId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ratings_star_id")
                            .from(Ratings::Table, Ratings::StarId)
                            .to(RatingStars::Table, RatingStars::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ratings_movie_id")
                            .from(Ratings::Table, Ratings::MovieId)
                            .to(Movies::Table, Movies::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Reviews::Table)
                    .if_not_exists()
                    .col(pk_auto(Reviews::Id))
                    .col(string_len(Reviews::Email, 254))
                    .col(string_len(Reviews::Name, 25))
                    .col(string_len(Reviews::Text, 5555))
                    .col(integer_null(Reviews::ParentId))
                    .col(integer(Reviews::MovieId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reviews_parent_id")
                            .from(Reviews::Table, Reviews::ParentId)
                            .to(Reviews::Table, Reviews::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reviews_movie_id")
                            .from(Reviews::Table, Reviews::MovieId)
                            .to(Movies::Table, Movies::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Reviews::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Ratings::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(RatingStars::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(MovieShots::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(MovieGenres::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(MovieActors::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(MovieDirectors::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Movies::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Genres::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Actors::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Categories::Table).to_owned()).await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Categories {
    Table,
    Id,
    Name,
    Description,
    Url,
}

#[derive(DeriveIden)]
enum Actors {
    Table,
    Id,
    Name,
    Age,
    Description,
    Image,
}

#[derive(DeriveIden)]
enum Genres {
    Table,
    Id,
    Name,
    Description,
    Url,
}

#[derive(DeriveIden)]
enum Movies {
    Table,
    Id,
    Title,
    Tagline,
    Description,
    Poster,
    Year,
    Country,
    WorldPremiere,
    Budget,
    FeesInUsa,
    FeesInWorld,
    CategoryId,
    Url,
    Draft,
}

#[derive(DeriveIden)]
enum MovieDirectors {
    Table,
    MovieId,
    ActorId,
}

#[derive(DeriveIden)]
enum MovieActors {
    Table,
    MovieId,
    ActorId,
}

#[derive(DeriveIden)]
enum MovieGenres {
    Table,
    MovieId,
    GenreId,
}

#[derive(DeriveIden)]
enum MovieShots {
    Table,
    Id,
    Title,
    Description,
    Image,
    MovieId,
}

#[derive(DeriveIden)]
enum RatingStars {
    Table,
    Id,
    Value,
}

#[derive(DeriveIden)]
enum Ratings {
    Table,
    Id,
    Ip,
    StarId,
    MovieId,
}

#[derive(DeriveIden)]
enum Reviews {
    Table,
    Id,
    Email,
    Name,
    Text,
    ParentId,
    MovieId,
}
