use tracing::{debug, info};

use super::aggregator::CategoryAggregator;
use super::classifier::classify;
use super::extinf::parse_metadata;
use super::profile_filter::accepts;
use super::scanner::{EntryScanner, RawCandidate};
use crate::models::{Category, Entry, Profile};

/// Label used when `group-title` is present but empty
pub const EMPTY_GROUP_FALLBACK: &str = "General";

/// Outcome of one [`CatalogBuilder::step`] call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepProgress {
    /// Candidate pairs consumed during this step
    pub processed: usize,
    /// Candidates that reached the aggregator during this step
    pub retained: usize,
    /// No further candidates remain
    pub finished: bool,
}

/// Incremental, profile-scoped catalog construction
///
/// Holds nothing but the scan position, the pending EXTINF line and the
/// entries retained so far. Pulling candidates in chunks of any size yields
/// the same catalog as a single pass.
pub struct CatalogBuilder<'a> {
    scanner: EntryScanner<'a>,
    profile: Profile,
    aggregator: CategoryAggregator,
    candidates_seen: usize,
    finished: bool,
}

impl<'a> CatalogBuilder<'a> {
    pub fn new(content: &'a str, profile: Profile) -> Self {
        Self {
            scanner: EntryScanner::new(content),
            profile,
            aggregator: CategoryAggregator::new(),
            candidates_seen: 0,
            finished: false,
        }
    }

    pub fn profile(&self) -> Profile {
        self.profile
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn candidates_seen(&self) -> usize {
        self.candidates_seen
    }

    pub fn retained(&self) -> usize {
        self.aggregator.len()
    }

    /// Process up to `max_candidates` pairs; `0` means no limit
    pub fn step(&mut self, max_candidates: usize) -> StepProgress {
        let mut progress = StepProgress::default();

        if self.finished {
            progress.finished = true;
            return progress;
        }

        if self.profile.target_kind().is_none() {
            debug!("Profile '{}' retains no playlist entries", self.profile);
            self.finished = true;
            progress.finished = true;
            return progress;
        }

        let limit = if max_candidates == 0 {
            usize::MAX
        } else {
            max_candidates
        };

        while progress.processed < limit {
            let Some(candidate) = self.scanner.next() else {
                self.finished = true;
                break;
            };

            progress.processed += 1;
            if let Some(entry) = build_entry(&candidate, self.profile) {
                self.aggregator.push(entry);
                progress.retained += 1;
            }
        }

        self.candidates_seen += progress.processed;
        progress.finished = self.finished;

        debug!(
            "Processed {} candidates ({} retained) for profile '{}' after {} lines",
            progress.processed,
            progress.retained,
            self.profile,
            self.scanner.lines_scanned()
        );

        progress
    }

    /// Consume the builder into categories sorted by label
    ///
    /// Candidates not yet stepped through are not scanned.
    pub fn finish(self) -> Vec<Category> {
        let entry_count = self.aggregator.len();
        let categories = self.aggregator.finish();

        info!(
            "Built catalog for profile '{}': {} entries in {} categories from {} candidates",
            self.profile,
            entry_count,
            categories.len(),
            self.candidates_seen
        );

        categories
    }
}

/// Classify and filter one candidate, materializing an [`Entry`] only when retained
fn build_entry(candidate: &RawCandidate<'_>, profile: Profile) -> Option<Entry> {
    let metadata = parse_metadata(candidate.metadata);

    if metadata.name.is_empty() {
        debug!(
            "Dropping entry without display name at line {}",
            candidate.line_number
        );
        return None;
    }

    let kind = classify(candidate.url, metadata.name, metadata.group);
    if !accepts(profile, kind) {
        return None;
    }

    let group = if metadata.group.is_empty() {
        EMPTY_GROUP_FALLBACK
    } else {
        metadata.group
    };

    Some(Entry::new(
        metadata.name.to_string(),
        group.to_string(),
        metadata.artwork.map(str::to_string),
        candidate.url.to_string(),
        kind,
    ))
}

/// Parse raw playlist text into the catalog for one profile
///
/// A pure function of its inputs: empty or malformed text yields a smaller
/// (possibly empty) catalog and unsupported profiles yield an empty one.
pub fn parse_playlist_subset(content: &str, profile: Profile) -> Vec<Category> {
    let mut builder = CatalogBuilder::new(content, profile);
    builder.step(0);
    builder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EntryKind, UNCATEGORIZED};

    const MIXED: &str = r#"#EXTM3U
#EXTINF:-1 tvg-logo="http://logo/bbc.png" group-title="News",BBC
http://x/bbc.m3u8
#EXTINF:-1 group-title="Action Movies",Die Hard
http://x/diehard.mkv
#EXTINF:-1 group-title="Season 1",Pilot
http://x/pilot.mp4
#EXTINF:-1 group-title="News",CNN
http://x/cnn.m3u8
#EXTINF:-1,Loose Film
http://x/loose.avi
"#;

    #[test]
    fn test_live_profile() {
        let catalog = parse_playlist_subset(MIXED, Profile::Live);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog[0].label, "News");

        let names: Vec<_> = catalog[0].members.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["BBC", "CNN"]);
        assert_eq!(catalog[0].members[0].artwork.as_deref(), Some("http://logo/bbc.png"));
        assert!(catalog[0].members.iter().all(|e| e.kind == EntryKind::Live));
    }

    #[test]
    fn test_movies_profile() {
        let catalog = parse_playlist_subset(MIXED, Profile::Movies);
        let labels: Vec<_> = catalog.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["Action Movies", UNCATEGORIZED]);
        assert_eq!(catalog[1].members[0].name, "Loose Film");
    }

    #[test]
    fn test_series_profile() {
        let catalog = parse_playlist_subset(MIXED, Profile::Series);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog[0].members[0].kind, EntryKind::Series);
    }

    #[test]
    fn test_admin_profile_is_empty() {
        assert!(parse_playlist_subset(MIXED, Profile::Admin).is_empty());
    }

    #[test]
    fn test_empty_name_is_dropped() {
        let content = "#EXTINF:-1 group-title=\"News\",\nhttp://x/a\n#EXTINF:-1,Kept\nhttp://x/b";
        let catalog = parse_playlist_subset(content, Profile::Live);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog[0].members.len(), 1);
        assert_eq!(catalog[0].members[0].name, "Kept");
    }

    #[test]
    fn test_empty_group_title_falls_back() {
        let content = "#EXTINF:-1 group-title=\"\",Nameless Group\nhttp://x/a";
        let catalog = parse_playlist_subset(content, Profile::Live);
        assert_eq!(catalog[0].label, EMPTY_GROUP_FALLBACK);
    }

    #[test]
    fn test_step_in_chunks() {
        let mut builder = CatalogBuilder::new(MIXED, Profile::Live);

        let first = builder.step(2);
        assert_eq!(first.processed, 2);
        assert_eq!(first.retained, 1);
        assert!(!first.finished);

        let second = builder.step(2);
        assert_eq!(second.processed, 2);
        assert_eq!(second.retained, 1);

        let third = builder.step(2);
        assert_eq!(third.processed, 1);
        assert!(third.finished);
        assert!(builder.is_finished());
        assert_eq!(builder.candidates_seen(), 5);
        assert_eq!(builder.retained(), 2);

        assert_eq!(builder.finish(), parse_playlist_subset(MIXED, Profile::Live));
    }

    #[test]
    fn test_step_after_finish_is_noop() {
        let mut builder = CatalogBuilder::new(MIXED, Profile::Series);
        builder.step(0);
        let again = builder.step(10);
        assert_eq!(again, StepProgress { processed: 0, retained: 0, finished: true });
    }

    #[test]
    fn test_admin_step_finishes_immediately() {
        let mut builder = CatalogBuilder::new(MIXED, Profile::Admin);
        let progress = builder.step(0);
        assert!(progress.finished);
        assert_eq!(progress.processed, 0);
        assert!(builder.finish().is_empty());
    }
}
