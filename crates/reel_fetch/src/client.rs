use std::path::PathBuf;

use async_trait::async_trait;
use reqwest::StatusCode;
use url::Url;

use reel_core::{parse_top_stories, Article, Error, Result};

use crate::snapshot;

pub const API_KEY_ENV: &str = "NYT_API_KEY";

const TOP_STORIES_URL: &str = "https://api.nytimes.com/svc/topstories/v2/movies.json";

#[async_trait]
pub trait TopStoriesSource: Send + Sync {
    /// Returns the name of the feed source
    fn source(&self) -> &str;

    /// Fetch the full top-stories article list, once
    async fn fetch_top_stories(&self) -> Result<Vec<Article>>;
}

/// Client for the NYT movies top-stories feed.
///
/// One GET per call, no retries, no timeout override. A 200 body is
/// snapshotted verbatim before it is decoded; any other status is surfaced
/// as [`Error::Fetch`].
pub struct TopStoriesClient {
    http: reqwest::Client,
    api_key: String,
    snapshot_path: PathBuf,
}

impl TopStoriesClient {
    pub fn new(api_key: String, snapshot_path: impl Into<PathBuf>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key,
            snapshot_path: snapshot_path.into(),
        }
    }

    fn endpoint(&self) -> Result<Url> {
        Url::parse_with_params(TOP_STORIES_URL, &[("api-key", self.api_key.as_str())])
            .map_err(|e| Error::Fetch(format!("invalid endpoint: {}", e)))
    }
}

#[async_trait]
impl TopStoriesSource for TopStoriesClient {
    fn source(&self) -> &str {
        "The New York Times"
    }

    async fn fetch_top_stories(&self) -> Result<Vec<Article>> {
        let url = self.endpoint()?;
        tracing::debug!(endpoint = TOP_STORIES_URL, "Requesting top stories");

        let response = self.http.get(url).send().await?;
        let status = response.status();
        if status != StatusCode::OK {
            return Err(Error::Fetch(format!("unexpected status {}", status)));
        }

        let body = response.text().await?;
        snapshot::write_snapshot(&self.snapshot_path, &body).await?;

        let articles = parse_top_stories(&body)?;
        tracing::info!(count = articles.len(), "Fetched top stories");
        Ok(articles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_carries_api_key() {
        let client = TopStoriesClient::new("secret".to_string(), "/tmp/snapshot.json");
        let url = client.endpoint().unwrap();
        assert_eq!(url.host_str(), Some("api.nytimes.com"));
        assert_eq!(url.path(), "/svc/topstories/v2/movies.json");
        assert_eq!(url.query(), Some("api-key=secret"));
    }

    #[test]
    fn test_source_name() {
        let client = TopStoriesClient::new("secret".to_string(), "/tmp/snapshot.json");
        assert_eq!(client.source(), "The New York Times");
    }
}
