//! Playlist sources
//!
//! Retrieval collaborators for the catalog engine: HTTP(S) downloads, local
//! files and a factory that chooses between them.

pub mod factory;
pub mod file;
pub mod m3u;
pub mod traits;

pub use factory::RetrieverFactory;
pub use file::FilePlaylistRetriever;
pub use m3u::HttpPlaylistRetriever;
pub use traits::PlaylistRetriever;
