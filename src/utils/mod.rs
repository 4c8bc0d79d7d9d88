//! Utility helpers shared by the retrieval layer and the binary

pub mod url;

pub use url::UrlUtils;
