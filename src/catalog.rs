use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryFilter,
    Set, TransactionTrait,
};
use tracing::debug;

use crate::{
    entities::{
        actor, category, genre, movie, movie_actor, movie_director, movie_genre, movie_shot,
        rating, rating_star, review,
    },
    error::AppResult,
    models::{NewActor, NewCategory, NewGenre, NewMovie, NewMovieShot, NewRating, NewReview},
};

// Deletion side effects (cascades, null-outs) are declared on the foreign
// keys and enforced by the database, so the delete methods are plain deletes.
#[derive(Clone)]
pub struct Catalog {
    db: DatabaseConnection,
}

impl Catalog {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    pub async fn create_category(&self, input: NewCategory) -> AppResult<category::Model> {
        let model = category::ActiveModel {
            id: Default::default(),
            name: Set(input.name),
            description: Set(input.description),
            url: Set(input.url),
        };
        Ok(model.insert(&self.db).await?)
    }

    pub async fn get_category(&self, id: i32) -> AppResult<Option<category::Model>> {
        Ok(category::Entity::find_by_id(id).one(&self.db).await?)
    }

    pub async fn list_categories(&self) -> AppResult<Vec<category::Model>> {
        Ok(category::Entity::find().all(&self.db).await?)
    }

    pub async fn update_category(&self, category: category::Model) -> AppResult<category::Model> {
        Ok(category.into_active_model().reset_all().update(&self.db).await?)
    }

    pub async fn delete_category(&self, id: i32) -> AppResult<()> {
        category::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(())
    }

    pub async fn create_actor(&self, input: NewActor) -> AppResult<actor::Model> {
        let model = actor::ActiveModel {
            id: Default::default(),
            name: Set(input.name),
            age: Set(input.age),
            description: Set(input.description),
            image: Set(input.image),
        };
        Ok(model.insert(&self.db).await?)
    }

    pub async fn get_actor(&self, id: i32) -> AppResult<Option<actor::Model>> {
        Ok(actor::Entity::find_by_id(id).one(&self.db).await?)
    }

    pub async fn list_actors(&self) -> AppResult<Vec<actor::Model>> {
        Ok(actor::Entity::find().all(&self.db).await?)
    }

    pub async fn update_actor(&self, actor: actor::Model) -> AppResult<actor::Model> {
        Ok(actor.into_active_model().reset_all().update(&self.db).await?)
    }

    pub async fn delete_actor(&self, id: i32) -> AppResult<()> {
        actor::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(())
    }

    pub async fn create_genre(&self, input: NewGenre) -> AppResult<genre::Model> {
        let model = genre::ActiveModel {
            id: Default::default(),
            name: Set(input.name),
            description: Set(input.description),
            url: Set(input.url),
        };
        Ok(model.insert(&self.db).await?)
    }

    pub async fn get_genre(&self, id: i32) -> AppResult<Option<genre::Model>> {
        Ok(genre::Entity::find_by_id(id).one(&self.db).await?)
    }

    pub async fn list_genres(&self) -> AppResult<Vec<genre::Model>> {
        Ok(genre::Entity::find().all(&self.db).await?)
    }

    pub async fn update_genre(&self, genre: genre::Model) -> AppResult<genre::Model> {
        Ok(genre.into_active_model().reset_all().update(&self.db).await?)
    }

    pub async fn delete_genre(&self, id: i32) -> AppResult<()> {
        genre::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(())
    }

    pub async fn create_movie(&self, input: NewMovie) -> AppResult<movie::Model> {
        let world_premiere =
            input.world_premiere.unwrap_or_else(|| chrono::Utc::now().date_naive());

        let txn = self.db.begin().await?;

        let model = movie::ActiveModel {
            id: Default::default(),
            title: Set(input.title),
            tagline: Set(input.tagline),
            description: Set(input.description),
            poster: Set(input.poster),
            year: Set(input.year),
            country: Set(input.country),
            world_premiere: Set(world_premiere),
            budget: Set(input.budget),
            fees_in_usa: Set(input.fees_in_usa),
            fees_in_world: Set(input.fees_in_world),
            category_id: Set(input.category_id),
            url: Set(input.url),
            draft: Set(input.draft),
        };
        let movie = model.insert(&txn).await?;

        for actor_id in input.director_ids {
            let link = movie_director::ActiveModel {
                movie_id: Set(movie.id),
                actor_id: Set(actor_id),
            };
            movie_director::Entity::insert(link).exec(&txn).await?;
        }

        for actor_id in input.actor_ids {
            let link = movie_actor::ActiveModel {
                movie_id: Set(movie.id),
                actor_id: Set(actor_id),
            };
            movie_actor::Entity::insert(link).exec(&txn).await?;
        }

        for genre_id in input.genre_ids {
            let link = movie_genre::ActiveModel {
                movie_id: Set(movie.id),
                genre_id: Set(genre_id),
            };
            movie_genre::Entity::insert(link).exec(&txn).await?;
        }

        txn.commit().await?;

        debug!(movie_id = movie.id, url = %movie.url, "created movie");

        Ok(movie)
    }

    pub async fn get_movie(&self, id: i32) -> AppResult<Option<movie::Model>> {
        Ok(movie::Entity::find_by_id(id).one(&self.db).await?)
    }

    pub async fn get_movie_by_url(&self, url: &str) -> AppResult<Option<movie::Model>> {
        Ok(movie::Entity::find()
            .filter(movie::Column::Url.eq(url))
            .one(&self.db)
            .await?)
    }

    // The listing query: every movie, drafts included, no ordering clause.
    pub async fn list_movies(&self) -> AppResult<Vec<movie::Model>> {
        Ok(movie::Entity::find().all(&self.db).await?)
    }

    pub async fn movie_directors(&self, movie_id: i32) -> AppResult<Vec<actor::Model>> {
        let links = movie_director::Entity::find()
            .filter(movie_director::Column::MovieId.eq(movie_id))
            .all(&self.db)
            .await?;
        self.actors_by_ids(links.into_iter().map(|link| link.actor_id).collect()).await
    }

    pub async fn movie_actors(&self, movie_id: i32) -> AppResult<Vec<actor::Model>> {
        let links = movie_actor::Entity::find()
            .filter(movie_actor::Column::MovieId.eq(movie_id))
            .all(&self.db)
            .await?;
        self.actors_by_ids(links.into_iter().map(|link| link.actor_id).collect()).await
    }

    // Directors and actors join to the same table, so `Related` could name
    // only one of the two roles; both lookups resolve through the join rows.
    async fn actors_by_ids(&self, ids: Vec<i32>) -> AppResult<Vec<actor::Model>> {
        Ok(actor::Entity::find().filter(actor::Column::Id.is_in(ids)).all(&self.db).await?)
    }

    pub async fn movie_genres(&self, movie_id: i32) -> AppResult<Vec<genre::Model>> {
        let links = movie_genre::Entity::find()
            .filter(movie_genre::Column::MovieId.eq(movie_id))
            .all(&self.db)
            .await?;
        let ids: Vec<i32> = links.into_iter().map(|link| link.genre_id).collect();
        Ok(genre::Entity::find().filter(genre::Column::Id.is_in(ids)).all(&self.db).await?)
    }

    pub async fn update_movie(&self, movie: movie::Model) -> AppResult<movie::Model> {
        Ok(movie.into_active_model().reset_all().update(&self.db).await?)
    }

    pub async fn delete_movie(&self, id: i32) -> AppResult<()> {
        movie::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(())
    }

    pub async fn add_movie_shot(&self, input: NewMovieShot) -> AppResult<movie_shot::Model> {
        let model = movie_shot::ActiveModel {
            id: Default::default(),
            title: Set(input.title),
            description: Set(input.description),
            image: Set(input.image),
            movie_id: Set(input.movie_id),
        };
        Ok(model.insert(&self.db).await?)
    }

    pub async fn movie_shots(&self, movie_id: i32) -> AppResult<Vec<movie_shot::Model>> {
        Ok(movie_shot::Entity::find()
            .filter(movie_shot::Column::MovieId.eq(movie_id))
            .all(&self.db)
            .await?)
    }

    pub async fn update_movie_shot(&self, shot: movie_shot::Model) -> AppResult<movie_shot::Model> {
        Ok(shot.into_active_model().reset_all().update(&self.db).await?)
    }

    pub async fn delete_movie_shot(&self, id: i32) -> AppResult<()> {
        movie_shot::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(())
    }

    pub async fn add_rating_star(&self, value: u16) -> AppResult<rating_star::Model> {
        let model = rating_star::ActiveModel { id: Default::default(), value: Set(value) };
        Ok(model.insert(&self.db).await?)
    }

    pub async fn list_rating_stars(&self) -> AppResult<Vec<rating_star::Model>> {
        Ok(rating_star::Entity::find().all(&self.db).await?)
    }

    pub async fn update_rating_star(
        &self,
        star: rating_star::Model,
    ) -> AppResult<rating_star::Model> {
        Ok(star.into_active_model().reset_all().update(&self.db).await?)
    }

    pub async fn delete_rating_star(&self, id: i32) -> AppResult<()> {
        rating_star::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(())
    }

    pub async fn add_rating(&self, input: NewRating) -> AppResult<rating::Model> {
        let model = rating::ActiveModel {
            id: Default::default(),
            ip: Set(input.ip),
            star_id: Set(input.star_id),
            movie_id: Set(input.movie_id),
        };
        Ok(model.insert(&self.db).await?)
    }

    pub async fn movie_ratings(&self, movie_id: i32) -> AppResult<Vec<rating::Model>> {
        Ok(rating::Entity::find()
            .filter(rating::Column::MovieId.eq(movie_id))
            .all(&self.db)
            .await?)
    }

    pub async fn update_rating(&self, rating: rating::Model) -> AppResult<rating::Model> {
        Ok(rating.into_active_model().reset_all().update(&self.db).await?)
    }

    pub async fn delete_rating(&self, id: i32) -> AppResult<()> {
        rating::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(())
    }

    pub async fn add_review(&self, input: NewReview) -> AppResult<review::Model> {
        let model = review::ActiveModel {
            id: Default::default(),
            email: Set(input.email),
            name: Set(input.name),
            text: Set(input.text),
            parent_id: Set(input.parent_id),
            movie_id: Set(input.movie_id),
        };
        Ok(model.insert(&self.db).await?)
    }

    pub async fn get_review(&self, id: i32) -> AppResult<Option<review::Model>> {
        Ok(review::Entity::find_by_id(id).one(&self.db).await?)
    }

    pub async fn movie_reviews(&self, movie_id: i32) -> AppResult<Vec<review::Model>> {
        Ok(review::Entity::find()
            .filter(review::Column::MovieId.eq(movie_id))
            .all(&self.db)
            .await?)
    }

    pub async fn update_review(&self, review: review::Model) -> AppResult<review::Model> {
        Ok(review.into_active_model().reset_all().update(&self.db).await?)
    }

    pub async fn delete_review(&self, id: i32) -> AppResult<()> {
        review::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(())
    }
}

#[cfg(test)]
pub(crate) async fn memory_catalog() -> Catalog {
    use sea_orm::{ConnectOptions, Database};
    use sea_orm_migration::MigratorTrait;

    // One pooled connection, so every query sees the same in-memory database.
    let mut opts = ConnectOptions::new("sqlite::memory:");
    opts.max_connections(1);
    let db = Database::connect(opts).await.expect("connect to in-memory sqlite");
    migration::Migrator::up(&db, None).await.expect("apply migrations");
    Catalog::new(db)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn film(title: &str, url: &str) -> NewMovie {
        NewMovie { title: title.into(), url: url.into(), ..NewMovie::default() }
    }

    fn category(name: &str, url: &str) -> NewCategory {
        NewCategory { name: name.into(), url: url.into(), ..Default::default() }
    }

    fn genre(name: &str, url: &str) -> NewGenre {
        NewGenre { name: name.into(), url: url.into(), ..Default::default() }
    }

    fn actor(name: &str, age: u16) -> NewActor {
        NewActor { name: name.into(), age, ..Default::default() }
    }

    #[tokio::test]
    async fn rating_stars_are_seeded() {
        let catalog = memory_catalog().await;

        let values: Vec<u16> =
            catalog.list_rating_stars().await.unwrap().into_iter().map(|s| s.value).collect();
        assert_eq!(values, vec![1, 2, 3, 4, 5]);
    }

    #[tokio::test]
    async fn duplicate_movie_url_is_rejected() {
        let catalog = memory_catalog().await;

        catalog.create_movie(film("Stalker", "stalker")).await.unwrap();
        let duplicate = catalog.create_movie(film("Stalker (1979)", "stalker")).await;
        assert!(duplicate.is_err());

        let survivors = catalog.list_movies().await.unwrap();
        assert_eq!(survivors.len(), 1);
        assert_eq!(survivors[0].title, "Stalker");
    }

    #[tokio::test]
    async fn duplicate_slugs_are_rejected_for_categories_and_genres() {
        let catalog = memory_catalog().await;

        catalog.create_category(category("Films", "films")).await.unwrap();
        assert!(catalog.create_category(category("Movies", "films")).await.is_err());

        catalog.create_genre(genre("Drama", "drama")).await.unwrap();
        assert!(catalog.create_genre(genre("Dramas", "drama")).await.is_err());
    }

    #[tokio::test]
    async fn deleting_a_category_detaches_its_movies() {
        let catalog = memory_catalog().await;

        let category = catalog.create_category(category("Films", "films")).await.unwrap();
        let movie = catalog
            .create_movie(NewMovie { category_id: Some(category.id), ..film("Solaris", "solaris") })
            .await
            .unwrap();
        assert_eq!(movie.category_id, Some(category.id));

        catalog.delete_category(category.id).await.unwrap();

        let movie = catalog.get_movie(movie.id).await.unwrap().expect("movie must survive");
        assert_eq!(movie.category_id, None);
    }

    #[tokio::test]
    async fn deleting_a_movie_cascades_to_its_dependents() {
        let catalog = memory_catalog().await;

        let director = catalog.create_actor(actor("Andrei Tarkovsky", 54)).await.unwrap();
        let genre = catalog.create_genre(genre("Sci-Fi", "sci-fi")).await.unwrap();
        let movie = catalog
            .create_movie(NewMovie {
                director_ids: vec![director.id],
                actor_ids: vec![director.id],
                genre_ids: vec![genre.id],
                ..film("Mirror", "mirror")
            })
            .await
            .unwrap();

        for n in 1..=3 {
            catalog
                .add_movie_shot(NewMovieShot {
                    title: format!("Shot {n}"),
                    movie_id: movie.id,
                    ..Default::default()
                })
                .await
                .unwrap();
        }

        let stars = catalog.list_rating_stars().await.unwrap();
        catalog
            .add_rating(NewRating {
                ip: "10.0.0.1".into(),
                star_id: stars[0].id,
                movie_id: movie.id,
            })
            .await
            .unwrap();
        catalog
            .add_review(NewReview {
                email: "viewer@example.com".into(),
                name: "Viewer".into(),
                text: "Slow and beautiful.".into(),
                parent_id: None,
                movie_id: movie.id,
            })
            .await
            .unwrap();

        assert_eq!(catalog.movie_shots(movie.id).await.unwrap().len(), 3);

        catalog.delete_movie(movie.id).await.unwrap();

        assert!(catalog.get_movie(movie.id).await.unwrap().is_none());
        assert!(catalog.movie_shots(movie.id).await.unwrap().is_empty());
        assert!(catalog.movie_ratings(movie.id).await.unwrap().is_empty());
        assert!(catalog.movie_reviews(movie.id).await.unwrap().is_empty());
        assert!(catalog.movie_directors(movie.id).await.unwrap().is_empty());
        assert!(catalog.movie_genres(movie.id).await.unwrap().is_empty());

        // The other side of every join survives.
        assert!(catalog.get_actor(director.id).await.unwrap().is_some());
        assert!(catalog.get_genre(genre.id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn deleting_a_parent_review_detaches_its_replies() {
        let catalog = memory_catalog().await;

        let movie =
            catalog.create_movie(film("Ivan's Childhood", "ivans-childhood")).await.unwrap();
        let parent = catalog
            .add_review(NewReview {
                email: "a@example.com".into(),
                name: "A".into(),
                text: "Remarkable debut.".into(),
                parent_id: None,
                movie_id: movie.id,
            })
            .await
            .unwrap();
        let reply = catalog
            .add_review(NewReview {
                email: "b@example.com".into(),
                name: "B".into(),
                text: "Agreed.".into(),
                parent_id: Some(parent.id),
                movie_id: movie.id,
            })
            .await
            .unwrap();

        catalog.delete_review(parent.id).await.unwrap();

        let reply = catalog.get_review(reply.id).await.unwrap().expect("reply must survive");
        assert_eq!(reply.parent_id, None);
    }

    #[tokio::test]
    async fn repeat_votes_from_one_ip_are_permitted() {
        let catalog = memory_catalog().await;

        let movie = catalog.create_movie(film("Nostalghia", "nostalghia")).await.unwrap();
        let stars = catalog.list_rating_stars().await.unwrap();

        for star in &stars[..2] {
            catalog
                .add_rating(NewRating {
                    ip: "192.0.2.7".into(),
                    star_id: star.id,
                    movie_id: movie.id,
                })
                .await
                .unwrap();
        }

        assert_eq!(catalog.movie_ratings(movie.id).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn deleting_a_star_cascades_to_its_votes() {
        let catalog = memory_catalog().await;

        let movie = catalog.create_movie(film("Andrei Rublev", "andrei-rublev")).await.unwrap();
        let stars = catalog.list_rating_stars().await.unwrap();
        catalog
            .add_rating(NewRating {
                ip: "198.51.100.4".into(),
                star_id: stars[4].id,
                movie_id: movie.id,
            })
            .await
            .unwrap();

        catalog.delete_rating_star(stars[4].id).await.unwrap();

        assert!(catalog.movie_ratings(movie.id).await.unwrap().is_empty());
        assert_eq!(catalog.list_rating_stars().await.unwrap().len(), 4);
    }

    #[tokio::test]
    async fn movie_relations_resolve_per_role() {
        let catalog = memory_catalog().await;

        let person = catalog.create_actor(actor("Clint Eastwood", 95)).await.unwrap();
        let co_star = catalog.create_actor(actor("Gene Hackman", 95)).await.unwrap();
        let genre = catalog.create_genre(genre("Western", "western")).await.unwrap();

        let movie = catalog
            .create_movie(NewMovie {
                director_ids: vec![person.id],
                actor_ids: vec![person.id, co_star.id],
                genre_ids: vec![genre.id],
                ..film("Unforgiven", "unforgiven")
            })
            .await
            .unwrap();

        let directors = catalog.movie_directors(movie.id).await.unwrap();
        assert_eq!(directors.len(), 1);
        assert_eq!(directors[0].name, "Clint Eastwood");

        let cast = catalog.movie_actors(movie.id).await.unwrap();
        assert_eq!(cast.len(), 2);

        let genres = catalog.movie_genres(movie.id).await.unwrap();
        assert_eq!(genres.len(), 1);
        assert_eq!(genres[0].url, "western");

        let by_url = catalog.get_movie_by_url("unforgiven").await.unwrap();
        assert_eq!(by_url.map(|m| m.id), Some(movie.id));
    }

    #[tokio::test]
    async fn deleting_an_actor_removes_join_rows_but_not_movies() {
        let catalog = memory_catalog().await;

        let person = catalog.create_actor(actor("Kim Ki-duk", 64)).await.unwrap();
        let movie = catalog
            .create_movie(NewMovie {
                director_ids: vec![person.id],
                actor_ids: vec![person.id],
                ..film("Spring, Summer...", "spring-summer")
            })
            .await
            .unwrap();

        catalog.delete_actor(person.id).await.unwrap();

        assert!(catalog.get_movie(movie.id).await.unwrap().is_some());
        assert!(catalog.movie_directors(movie.id).await.unwrap().is_empty());
        assert!(catalog.movie_actors(movie.id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn deleting_a_genre_removes_join_rows_but_not_movies() {
        let catalog = memory_catalog().await;

        let genre = catalog.create_genre(genre("Noir", "noir")).await.unwrap();
        let movie = catalog
            .create_movie(NewMovie {
                genre_ids: vec![genre.id],
                ..film("The Third Man", "the-third-man")
            })
            .await
            .unwrap();

        catalog.delete_genre(genre.id).await.unwrap();

        assert!(catalog.get_movie(movie.id).await.unwrap().is_some());
        assert!(catalog.movie_genres(movie.id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn world_premiere_defaults_to_the_creation_date() {
        let catalog = memory_catalog().await;

        let movie = catalog.create_movie(film("The Sacrifice", "the-sacrifice")).await.unwrap();
        assert_eq!(movie.world_premiere, chrono::Utc::now().date_naive());

        let premiere = chrono::NaiveDate::from_ymd_opt(1972, 5, 13).unwrap();
        let dated = catalog
            .create_movie(NewMovie {
                world_premiere: Some(premiere),
                ..film("Solaris (Cannes)", "solaris-cannes")
            })
            .await
            .unwrap();
        assert_eq!(dated.world_premiere, premiere);
    }

    #[tokio::test]
    async fn updates_are_whole_record_mutation() {
        let catalog = memory_catalog().await;

        let movie = catalog.create_movie(film("Stalker", "stalker")).await.unwrap();
        assert!(!movie.draft);

        let mut changed = movie.clone();
        changed.tagline = "The Zone does not let everyone in".into();
        changed.draft = true;
        catalog.update_movie(changed).await.unwrap();

        let movie = catalog.get_movie(movie.id).await.unwrap().unwrap();
        assert_eq!(movie.tagline, "The Zone does not let everyone in");
        assert!(movie.draft);
    }
}
