//! Local playlist retrieval

use async_trait::async_trait;
use tracing::{info, warn};

use super::traits::PlaylistRetriever;
use crate::errors::{SourceError, SourceResult};
use crate::utils::UrlUtils;

/// Reads playlists from the local filesystem
pub struct FilePlaylistRetriever {
    max_playlist_bytes: usize,
}

impl FilePlaylistRetriever {
    pub fn new(max_playlist_bytes: usize) -> Self {
        Self { max_playlist_bytes }
    }
}

#[async_trait]
impl PlaylistRetriever for FilePlaylistRetriever {
    async fn fetch(&self, locator: &str) -> SourceResult<String> {
        let path = UrlUtils::local_path(locator)
            .ok_or_else(|| SourceError::invalid_locator(locator, "not a local path"))?;

        let metadata = tokio::fs::metadata(&path).await.map_err(|e| {
            warn!("Cannot read playlist file {}: {}", path.display(), e);
            SourceError::retrieval_failed(locator, e.to_string())
        })?;

        let size = usize::try_from(metadata.len()).unwrap_or(usize::MAX);
        if size > self.max_playlist_bytes {
            return Err(SourceError::BodyTooLarge {
                size,
                max_size: self.max_playlist_bytes,
            });
        }

        let bytes = tokio::fs::read(&path)
            .await
            .map_err(|e| SourceError::retrieval_failed(locator, e.to_string()))?;

        info!("Read playlist file {}: {} bytes", path.display(), bytes.len());
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    fn name(&self) -> &'static str {
        "file"
    }
}
