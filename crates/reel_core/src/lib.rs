pub mod article;
pub mod classify;
pub mod error;
pub mod facets;
pub mod timefmt;

pub use article::{parse_top_stories, Article, Multimedia};
pub use classify::{classify, select, Classified};
pub use error::Error;
pub type Result<T> = std::result::Result<T, Error>;
