//! URL utilities for playlist locators
//!
//! A locator is either an HTTP(S) URL or a local path, optionally written as
//! a `file://` URL.

use std::path::PathBuf;

use url::Url;

/// URL utilities for consistent locator handling
pub struct UrlUtils;

impl UrlUtils {
    /// Whether the locator should be fetched over HTTP
    ///
    /// # Examples
    ///
    /// ```rust
    /// use m3u_catalog::utils::url::UrlUtils;
    ///
    /// assert!(UrlUtils::is_remote("https://example.com/list.m3u"));
    /// assert!(!UrlUtils::is_remote("/srv/playlists/list.m3u"));
    /// ```
    pub fn is_remote(locator: &str) -> bool {
        let lower = locator.trim().to_lowercase();
        lower.starts_with("http://") || lower.starts_with("https://")
    }

    /// Parse and validate a URL
    pub fn parse_and_validate(url: &str) -> Result<Url, url::ParseError> {
        Url::parse(url.trim())
    }

    /// Resolve a non-remote locator to a filesystem path
    ///
    /// `file://` URLs are converted through [`Url::to_file_path`]; anything
    /// else is taken as a plain path.
    pub fn local_path(locator: &str) -> Option<PathBuf> {
        let trimmed = locator.trim();
        if trimmed.is_empty() || Self::is_remote(trimmed) {
            return None;
        }

        if trimmed.to_lowercase().starts_with("file://") {
            return Url::parse(trimmed).ok()?.to_file_path().ok();
        }

        Some(PathBuf::from(trimmed))
    }

    /// Mask user-info and credential query values so a locator can be logged
    ///
    /// Locators that do not parse as URLs (plain paths) are returned unchanged.
    pub fn obfuscate_credentials(locator: &str) -> String {
        let Ok(mut url) = Url::parse(locator) else {
            return locator.to_string();
        };

        if !url.username().is_empty() {
            let _ = url.set_username(MASK);
        }
        if url.password().is_some() {
            let _ = url.set_password(Some(MASK));
        }

        let has_secret = url.query_pairs().any(|(key, _)| is_sensitive_param(&key));
        if has_secret {
            let pairs: Vec<(String, String)> = url
                .query_pairs()
                .map(|(key, value)| {
                    let value = if is_sensitive_param(&key) {
                        MASK.to_string()
                    } else {
                        value.into_owned()
                    };
                    (key.into_owned(), value)
                })
                .collect();
            url.query_pairs_mut().clear().extend_pairs(pairs);
        }

        url.to_string()
    }
}

const MASK: &str = "****";

/// Query keys Xtream-style panels use for credentials
const SENSITIVE_PARAMS: &[&str] = &["username", "password", "user", "pass", "pwd", "passwd", "token"];

fn is_sensitive_param(key: &str) -> bool {
    SENSITIVE_PARAMS
        .iter()
        .any(|param| key.eq_ignore_ascii_case(param))
}
