use std::sync::Arc;

use axum::{Router, routing::get};
use kinoteka::{AppState, catalog::Catalog, config::Config, db, media, routes};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "info,kinoteka=debug,sqlx=warn".to_string()),
        )
        .init();

    let config = Config::from_env()?;
    media::ensure_layout(&config.media_root)?;

    let db = db::connect_and_migrate(&config.database_url).await?;
    let catalog = Catalog::new(db);

    let state = Arc::new(AppState { catalog });

    let app = Router::new()
        .route("/", get(routes::movie_list))
        .nest_service("/media", ServeDir::new(&config.media_root))
        .with_state(state)
        .layer(CorsLayer::new().allow_origin(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    tracing::info!(addr = %config.addr, "listening");
    axum::serve(listener, app).await?;

    Ok(())
}
