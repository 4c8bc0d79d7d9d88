//! Presentation-side catalog handling
//!
//! Fetch-once loading with per-profile re-parsing, a `loading`/`error`/`ready`
//! state the UI can render, and client-side name filtering.

pub mod loader;
pub mod search;

pub use loader::{CatalogLoader, LoadState, StateReceiver};
pub use search::{filter_by_query, row_preview};
