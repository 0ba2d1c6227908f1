use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Missing API key: set the {0} environment variable")]
    MissingApiKey(&'static str),

    #[error("Fetch failed: {0}")]
    Fetch(String),

    #[error("Malformed article at index {index}: {reason}")]
    MalformedArticle { index: usize, reason: String },

    #[error("External error: {0}")]
    External(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
