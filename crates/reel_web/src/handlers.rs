use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::Html,
    Json,
};
use chrono::Utc;
use serde::Deserialize;

use reel_core::{classify::select, Article};

use crate::render::{self, Layout, View};
use crate::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct DashboardParams {
    pub view: Option<String>,
    pub layout: Option<String>,
}

pub async fn dashboard(
    State(state): State<Arc<AppState>>,
    Query(params): Query<DashboardParams>,
) -> Html<String> {
    let session = state.ensure_loaded().await;
    let view = params
        .view
        .as_deref()
        .and_then(View::from_slug)
        .unwrap_or(View::Reviews);
    let layout = match params.layout.as_deref() {
        Some("grid") => Layout::Grid,
        _ => Layout::Detail,
    };
    Html(render::page(view, layout, &session, Utc::now()))
}

pub async fn list_articles(State(state): State<Arc<AppState>>) -> Json<Vec<Article>> {
    let session = state.ensure_loaded().await;
    Json(session.articles)
}

pub async fn list_reviews(State(state): State<Arc<AppState>>) -> Json<Vec<Article>> {
    let session = state.ensure_loaded().await;
    Json(cloned(&session.classified.reviews, &session.articles))
}

pub async fn list_critics_picks(State(state): State<Arc<AppState>>) -> Json<Vec<Article>> {
    let session = state.ensure_loaded().await;
    Json(cloned(&session.classified.critics_picks, &session.articles))
}

pub async fn list_related_news(State(state): State<Arc<AppState>>) -> Json<Vec<Article>> {
    let session = state.ensure_loaded().await;
    Json(cloned(&session.classified.related_news, &session.articles))
}

fn cloned(indices: &[usize], articles: &[Article]) -> Vec<Article> {
    select(indices, articles).into_iter().cloned().collect()
}
