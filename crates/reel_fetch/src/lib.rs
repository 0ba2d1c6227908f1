pub mod client;
pub mod snapshot;

pub use client::{TopStoriesClient, TopStoriesSource, API_KEY_ENV};
pub use snapshot::DEFAULT_SNAPSHOT_PATH;

pub mod prelude {
    pub use crate::client::{TopStoriesClient, TopStoriesSource};
    pub use reel_core::{Article, Error, Result};
}
