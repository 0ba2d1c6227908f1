use std::path::Path;

use tokio::fs;

use reel_core::Result;

pub const DEFAULT_SNAPSHOT_PATH: &str = "data/movie_topstories.json";

/// Write the raw feed body verbatim, replacing any prior snapshot.
pub async fn write_snapshot(path: &Path, body: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).await?;
        }
    }
    fs::write(path, body).await?;
    tracing::info!(path = %path.display(), bytes = body.len(), "Snapshot written");
    Ok(())
}
