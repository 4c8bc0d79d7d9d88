//! Playlist ingestion and profile-scoped classification
//!
//! Raw text flows through the scanner, metadata extractor, classifier and
//! profile filter before reaching the aggregator:
//!
//! ```rust
//! use m3u_catalog::ingestor::parse_playlist_subset;
//! use m3u_catalog::models::{EntryKind, Profile};
//!
//! let raw = "#EXTINF:-1 group-title=\"News\",BBC\nhttp://x/bbc.m3u8";
//! let catalog = parse_playlist_subset(raw, Profile::Live);
//!
//! assert_eq!(catalog[0].label, "News");
//! assert_eq!(catalog[0].members[0].kind, EntryKind::Live);
//! ```
//!
//! Nothing is kept between calls, so independent parses (different profiles,
//! different threads) never interact.

pub mod aggregator;
pub mod classifier;
pub mod extinf;
pub mod m3u_parser;
pub mod profile_filter;
pub mod scanner;

pub use aggregator::CategoryAggregator;
pub use classifier::classify;
pub use extinf::{extract_attribute, parse_metadata, Attribute, EntryMetadata};
pub use m3u_parser::{parse_playlist_subset, CatalogBuilder, StepProgress};
pub use profile_filter::accepts;
pub use scanner::{EntryScanner, RawCandidate};
