//! Retrieval collaborator abstraction
//!
//! The catalog engine treats retrieval as already resolved. Retrievers turn
//! a locator into the full playlist text or a
//! [`SourceError`](crate::errors::SourceError).

use async_trait::async_trait;

use crate::errors::SourceResult;

/// Fetches raw playlist text for a locator
#[async_trait]
pub trait PlaylistRetriever: Send + Sync {
    /// Return the complete playlist text
    async fn fetch(&self, locator: &str) -> SourceResult<String>;

    /// Short name used in log messages
    fn name(&self) -> &'static str;
}
