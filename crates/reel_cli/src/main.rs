use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use tracing::info;

use reel_core::{classify, timefmt, Error, Result};
use reel_fetch::{TopStoriesClient, TopStoriesSource, API_KEY_ENV, DEFAULT_SNAPSHOT_PATH};
use reel_web::{create_app, AppState};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug)]
struct FeedArgs {
    /// New York Times API key
    #[arg(long, env = API_KEY_ENV, hide_env_values = true)]
    api_key: Option<String>,

    /// Path the raw feed snapshot is written to
    #[arg(long, default_value = DEFAULT_SNAPSHOT_PATH)]
    snapshot: PathBuf,
}

impl FeedArgs {
    fn client(&self) -> Result<TopStoriesClient> {
        match &self.api_key {
            Some(key) => Ok(TopStoriesClient::new(key.clone(), &self.snapshot)),
            None => Err(Error::MissingApiKey(API_KEY_ENV)),
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Serve the dashboard and JSON API
    Serve {
        #[command(flatten)]
        feed: FeedArgs,

        /// Address to bind
        #[arg(long, default_value = "127.0.0.1:3000")]
        addr: SocketAddr,
    },
    /// Fetch the feed once, write the snapshot, and print category counts
    Fetch {
        #[command(flatten)]
        feed: FeedArgs,
    },
    /// Fetch and print one line per article with its category
    Report {
        #[command(flatten)]
        feed: FeedArgs,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { feed, addr } => {
            let state = AppState::new(Arc::new(feed.client()?));
            let app = create_app(state).await;
            info!("🎬 Dashboard listening on http://{}", addr);
            let listener = tokio::net::TcpListener::bind(addr).await?;
            axum::serve(listener, app).await?;
        }
        Commands::Fetch { feed } => {
            let client = feed.client()?;
            let articles = client.fetch_top_stories().await?;
            let classified = classify::classify(&articles);
            println!("Fetched {} articles", articles.len());
            println!("  🎬 movie reviews: {}", classified.reviews.len());
            println!("  👏 critic's picks: {}", classified.critics_picks.len());
            println!("  🗞️ related news: {}", classified.related_news.len());
        }
        Commands::Report { feed } => {
            let client = feed.client()?;
            let articles = client.fetch_top_stories().await?;
            let now = chrono::Utc::now();
            for article in &articles {
                let marker = if classify::is_critics_pick(article) {
                    "👏"
                } else if classify::is_movie_review(article) {
                    "🎬"
                } else {
                    "🗞️"
                };
                println!(
                    "{} {} ({})",
                    marker,
                    article.title,
                    timefmt::how_long_ago(article.published_date, now)
                );
            }
        }
    }

    Ok(())
}
