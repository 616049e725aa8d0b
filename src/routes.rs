use std::sync::Arc;

use axum::{extract::State, response::Html};

use crate::{AppState, error::AppResult, templates};

pub async fn movie_list(State(state): State<Arc<AppState>>) -> AppResult<Html<String>> {
    let movie_list = state.catalog.list_movies().await?;
    Ok(Html(templates::movie_list_page(&movie_list)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{catalog::memory_catalog, models::NewMovie};

    async fn test_state() -> Arc<AppState> {
        Arc::new(AppState { catalog: memory_catalog().await })
    }

    #[tokio::test]
    async fn listing_contains_created_movies() {
        let state = test_state().await;
        state
            .catalog
            .create_movie(NewMovie {
                title: "Test Film".into(),
                url: "test-film".into(),
                ..Default::default()
            })
            .await
            .unwrap();

        let Html(body) = movie_list(State(state)).await.unwrap();
        assert!(body.contains("Test Film"));
    }

    #[tokio::test]
    async fn listing_includes_drafts() {
        let state = test_state().await;
        state
            .catalog
            .create_movie(NewMovie {
                title: "Unfinished Cut".into(),
                url: "unfinished-cut".into(),
                draft: true,
                ..Default::default()
            })
            .await
            .unwrap();

        let Html(body) = movie_list(State(state)).await.unwrap();
        assert!(body.contains("Unfinished Cut"));
    }

    #[tokio::test]
    async fn empty_catalog_still_renders() {
        let state = test_state().await;

        let Html(body) = movie_list(State(state)).await.unwrap();
        assert!(body.contains("No movies in the catalog yet."));
    }
}
