use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{info, warn};

use reel_core::{classify, Article, Classified};
use reel_fetch::TopStoriesSource;

/// One session's worth of feed data: the articles as fetched, the
/// classified views into them, and whether the fetch itself failed.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub articles: Vec<Article>,
    pub classified: Classified,
    pub fetch_failed: bool,
}

/// Shared application state. The feed is fetched lazily on first access and
/// never re-polled for the lifetime of the state.
pub struct AppState {
    source: Arc<dyn TopStoriesSource>,
    session: RwLock<Option<Session>>,
}

impl AppState {
    pub fn new(source: Arc<dyn TopStoriesSource>) -> Self {
        Self {
            source,
            session: RwLock::new(None),
        }
    }

    /// Idempotent: the first caller fetches and classifies; every later
    /// caller gets the stored session. A failed fetch is downgraded to an
    /// empty, flagged session so the dashboard still renders.
    pub async fn ensure_loaded(&self) -> Session {
        if let Some(session) = self.session.read().await.as_ref() {
            return session.clone();
        }

        let mut guard = self.session.write().await;
        // A concurrent caller may have loaded while we waited on the lock
        if let Some(session) = guard.as_ref() {
            return session.clone();
        }

        let session = match self.source.fetch_top_stories().await {
            Ok(articles) => {
                let classified = classify(&articles);
                info!(
                    source = self.source.source(),
                    total = articles.len(),
                    reviews = classified.reviews.len(),
                    critics_picks = classified.critics_picks.len(),
                    related_news = classified.related_news.len(),
                    "Session loaded"
                );
                Session {
                    articles,
                    classified,
                    fetch_failed: false,
                }
            }
            Err(e) => {
                warn!(error = %e, "Top-stories fetch failed; serving an empty session");
                Session {
                    fetch_failed: true,
                    ..Session::default()
                }
            }
        };

        *guard = Some(session.clone());
        session
    }
}
