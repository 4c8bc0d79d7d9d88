//! Line scanner for Extended-M3U text
//!
//! Turns raw playlist text into a lazy sequence of `(metadata, url)` pairs.
//! Lines are trimmed, blanks and uninterpreted `#` directives are skipped.

use tracing::debug;

/// Directive that opens an entry
pub const EXTINF_PREFIX: &str = "#EXTINF:";

/// One EXTINF line paired with the locator line that closed it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawCandidate<'a> {
    pub metadata: &'a str,
    pub url: &'a str,
    /// 1-based line number of the locator line
    pub line_number: usize,
}

/// Lazy scanner over playlist lines
///
/// The only state carried between candidates is the line position and the
/// pending EXTINF line, so a caller can pull a few candidates at a time.
pub struct EntryScanner<'a> {
    lines: std::iter::Enumerate<std::str::Lines<'a>>,
    pending: Option<&'a str>,
    lines_scanned: usize,
}

impl<'a> EntryScanner<'a> {
    pub fn new(content: &'a str) -> Self {
        Self {
            lines: content.lines().enumerate(),
            pending: None,
            lines_scanned: 0,
        }
    }

    /// Physical lines consumed so far
    pub fn lines_scanned(&self) -> usize {
        self.lines_scanned
    }
}

impl<'a> Iterator for EntryScanner<'a> {
    type Item = RawCandidate<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        for (index, raw_line) in self.lines.by_ref() {
            self.lines_scanned = index + 1;
            let line = raw_line.trim();

            if line.is_empty() {
                continue;
            }

            if line.starts_with(EXTINF_PREFIX) {
                if self.pending.replace(line).is_some() {
                    debug!("Dropping EXTINF line without stream URL before line {}", index + 1);
                }
                continue;
            }

            if line.starts_with('#') {
                continue;
            }

            match self.pending.take() {
                Some(metadata) => {
                    return Some(RawCandidate {
                        metadata,
                        url: line,
                        line_number: index + 1,
                    });
                }
                None => {
                    debug!("Ignoring stream URL without EXTINF metadata at line {}", index + 1);
                }
            }
        }

        if self.pending.take().is_some() {
            debug!("Dropping trailing EXTINF line without stream URL");
        }

        None
    }
}
