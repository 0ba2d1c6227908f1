use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// One entry of the top-stories `results` array.
///
/// Articles are immutable once decoded; classification and rendering only
/// ever borrow them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    pub url: String,
    pub section: String,
    pub kicker: String,
    pub published_date: DateTime<Utc>,
    pub per_facet: Vec<String>,
    pub des_facet: Vec<String>,
    pub multimedia: Vec<Multimedia>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Multimedia {
    pub url: String,
    #[serde(default)]
    pub format: String,
    #[serde(default)]
    pub caption: String,
}

impl Article {
    /// The last multimedia entry is the highest-resolution image in the feed.
    pub fn last_image(&self) -> Option<&Multimedia> {
        self.multimedia.last()
    }
}

#[derive(Debug, Deserialize)]
struct Envelope {
    results: Vec<serde_json::Value>,
}

/// Decode a raw top-stories body.
///
/// Each element of `results` is decoded on its own so that a bad record
/// fails here, as a [`Error::MalformedArticle`] naming the offending index,
/// rather than deep inside rendering.
pub fn parse_top_stories(body: &str) -> Result<Vec<Article>> {
    let envelope: Envelope = serde_json::from_str(body)?;
    envelope
        .results
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            serde_json::from_value(value).map_err(|e| Error::MalformedArticle {
                index,
                reason: e.to_string(),
            })
        })
        .collect()
}
