use chrono::NaiveDate;

#[derive(Clone, Debug, Default)]
pub struct NewCategory {
    pub name: String,
    pub description: String,
    pub url: String,
}

#[derive(Clone, Debug, Default)]
pub struct NewActor {
    pub name: String,
    pub age: u16,
    pub description: String,
    pub image: String,
}

#[derive(Clone, Debug, Default)]
pub struct NewGenre {
    pub name: String,
    pub description: String,
    pub url: String,
}

#[derive(Clone, Debug)]
pub struct NewMovie {
    pub title: String,
    pub tagline: String,
    pub description: String,
    pub poster: String,
    pub year: u16,
    pub country: String,
    pub director_ids: Vec<i32>,
    pub actor_ids: Vec<i32>,
    pub genre_ids: Vec<i32>,
    // None means "date the record was created", filled in by the store.
    pub world_premiere: Option<NaiveDate>,
    pub budget: u32,
    pub fees_in_usa: u32,
    pub fees_in_world: u32,
    pub category_id: Option<i32>,
    pub url: String,
    pub draft: bool,
}

impl Default for NewMovie {
    fn default() -> Self {
        Self {
            title: String::new(),
            tagline: String::new(),
            description: String::new(),
            poster: String::new(),
            year: 2000,
            country: String::new(),
            director_ids: Vec::new(),
            actor_ids: Vec::new(),
            genre_ids: Vec::new(),
            world_premiere: None,
            budget: 0,
            fees_in_usa: 0,
            fees_in_world: 0,
            category_id: None,
            url: String::new(),
            draft: false,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct NewMovieShot {
    pub title: String,
    pub description: String,
    pub image: String,
    pub movie_id: i32,
}

#[derive(Clone, Debug, Default)]
pub struct NewRating {
    pub ip: String,
    pub star_id: i32,
    pub movie_id: i32,
}

#[derive(Clone, Debug, Default)]
pub struct NewReview {
    pub email: String,
    pub name: String,
    pub text: String,
    pub parent_id: Option<i32>,
    pub movie_id: i32,
}
