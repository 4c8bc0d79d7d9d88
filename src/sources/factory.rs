//! Retriever factory
//!
//! Picks a retriever from the shape of the locator: HTTP(S) URLs go over the
//! network, everything else is read from disk.

use std::sync::Arc;

use super::file::FilePlaylistRetriever;
use super::m3u::HttpPlaylistRetriever;
use super::traits::PlaylistRetriever;
use crate::config::RetrievalConfig;
use crate::errors::{SourceError, SourceResult};
use crate::utils::UrlUtils;

pub struct RetrieverFactory;

impl RetrieverFactory {
    /// Create the retriever that can serve `locator`
    ///
    /// # Errors
    /// Returns [`SourceError::InvalidLocator`] for blank locators and
    /// [`SourceError::RetrievalFailed`] if the HTTP client cannot be built.
    pub fn for_locator(
        locator: &str,
        config: &RetrievalConfig,
    ) -> SourceResult<Arc<dyn PlaylistRetriever>> {
        if UrlUtils::is_remote(locator) {
            return Ok(Arc::new(HttpPlaylistRetriever::new(config)?));
        }

        if UrlUtils::local_path(locator).is_some() {
            return Ok(Arc::new(FilePlaylistRetriever::new(config.max_playlist_bytes)));
        }

        Err(SourceError::invalid_locator(locator, "locator is empty"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selects_http() {
        let retriever =
            RetrieverFactory::for_locator("https://example.com/a.m3u", &RetrievalConfig::default())
                .unwrap();
        assert_eq!(retriever.name(), "http");
    }

    #[test]
    fn test_selects_file() {
        let retriever =
            RetrieverFactory::for_locator("./playlists/a.m3u", &RetrievalConfig::default()).unwrap();
        assert_eq!(retriever.name(), "file");
    }

    #[test]
    fn test_rejects_blank() {
        assert!(matches!(
            RetrieverFactory::for_locator("  ", &RetrievalConfig::default()),
            Err(SourceError::InvalidLocator { .. })
        ));
    }
}
