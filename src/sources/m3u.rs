//! HTTP playlist retrieval
//!
//! Downloads M3U/M3U8 playlists over HTTP(S). The body is streamed so the
//! configured size limit is enforced before the whole response is buffered.

use async_trait::async_trait;
use futures::StreamExt;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info, warn};

use super::traits::PlaylistRetriever;
use crate::config::RetrievalConfig;
use crate::errors::{SourceError, SourceResult};
use crate::utils::UrlUtils;

/// HTTP(S) playlist retriever
pub struct HttpPlaylistRetriever {
    client: Client,
    max_playlist_bytes: usize,
}

impl HttpPlaylistRetriever {
    pub fn new(config: &RetrievalConfig) -> SourceResult<Self> {
        let mut builder = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .user_agent(config.user_agent.clone());

        if config.request_timeout_secs > 0 {
            builder = builder.timeout(Duration::from_secs(config.request_timeout_secs));
        }

        let client = builder
            .build()
            .map_err(|e| SourceError::retrieval_failed("http_client", e.to_string()))?;

        Ok(Self {
            client,
            max_playlist_bytes: config.max_playlist_bytes,
        })
    }

    fn map_transport_error(url: &str, error: reqwest::Error) -> SourceError {
        if error.is_timeout() {
            SourceError::timeout(url)
        } else {
            SourceError::retrieval_failed(url, error.without_url().to_string())
        }
    }
}

#[async_trait]
impl PlaylistRetriever for HttpPlaylistRetriever {
    async fn fetch(&self, locator: &str) -> SourceResult<String> {
        let safe_url = UrlUtils::obfuscate_credentials(locator);
        let url = UrlUtils::parse_and_validate(locator)
            .map_err(|e| SourceError::invalid_locator(safe_url.clone(), e.to_string()))?;

        info!("Fetching playlist from {}", safe_url);

        let response = self.client.get(url).send().await.map_err(|e| {
            let e = e.without_url();
            warn!("Failed to connect to playlist source {}: {}", safe_url, e);
            Self::map_transport_error(&safe_url, e)
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!("Playlist source {} returned {}", safe_url, status);
            return Err(SourceError::http(
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown"),
            ));
        }

        if let Some(length) = response.content_length() {
            let length = usize::try_from(length).unwrap_or(usize::MAX);
            if length > self.max_playlist_bytes {
                return Err(SourceError::BodyTooLarge {
                    size: length,
                    max_size: self.max_playlist_bytes,
                });
            }
        }

        let mut body = Vec::new();
        let mut stream = response.bytes_stream();

        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|e| Self::map_transport_error(&safe_url, e))?;

            let size = body.len() + chunk.len();
            if size > self.max_playlist_bytes {
                return Err(SourceError::BodyTooLarge {
                    size,
                    max_size: self.max_playlist_bytes,
                });
            }

            body.extend_from_slice(&chunk);
            debug!("Downloaded {} bytes from {}", body.len(), safe_url);
        }

        info!("Download completed for {}: {} bytes", safe_url, body.len());
        Ok(String::from_utf8_lossy(&body).into_owned())
    }

    fn name(&self) -> &'static str {
        "http"
    }
}
