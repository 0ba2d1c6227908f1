use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

pub mod handlers;
pub mod render;
pub mod state;

pub use state::AppState;

pub async fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::permissive();

    Router::new()
        .route("/", get(handlers::dashboard))
        .route("/api/articles", get(handlers::list_articles))
        .route("/api/reviews", get(handlers::list_reviews))
        .route("/api/critics-picks", get(handlers::list_critics_picks))
        .route("/api/related-news", get(handlers::list_related_news))
        .layer(cors)
        .with_state(Arc::new(state))
}

pub mod prelude {
    pub use crate::AppState;
    pub use reel_core::{Article, Error, Result};
}
