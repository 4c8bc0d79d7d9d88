//! Heuristic content-type classification
//!
//! Rules are evaluated in priority order and the first match wins. Group
//! label signals outrank file-extension signals; no signal means live.

use crate::models::EntryKind;

/// Group label fragments that mark episodic content
pub const SERIES_GROUP_KEYWORDS: &[&str] = &["series", "season"];

/// Group label fragments that mark on-demand video
pub const ON_DEMAND_GROUP_KEYWORDS: &[&str] = &["movie", "vod", "pelicula", "cinema"];

/// Locator suffixes of file containers served on demand
pub const ON_DEMAND_EXTENSIONS: &[&str] = &[".mkv", ".mp4", ".avi"];

/// Classify an entry from its locator, display name and group label
///
/// Pure and deterministic. The display name is accepted for signature
/// stability but carries no signal under the current rules.
pub fn classify(url: &str, _name: &str, group: &str) -> EntryKind {
    let lower_group = group.to_lowercase();

    if contains_any(&lower_group, SERIES_GROUP_KEYWORDS) {
        return EntryKind::Series;
    }

    if contains_any(&lower_group, ON_DEMAND_GROUP_KEYWORDS) {
        return EntryKind::OnDemand;
    }

    let lower_url = url.to_lowercase();
    if ON_DEMAND_EXTENSIONS
        .iter()
        .any(|extension| lower_url.ends_with(extension))
    {
        return EntryKind::OnDemand;
    }

    EntryKind::Live
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}
