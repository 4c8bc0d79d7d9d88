//! EXTINF metadata extraction
//!
//! Pulls the display name, group label and artwork reference out of a single
//! `#EXTINF:` line. Attribute lookup is a plain pattern search for
//! `key="value"`; no attempt is made to validate the rest of the directive.

use std::sync::OnceLock;

use regex::Regex;

use crate::models::UNCATEGORIZED;

/// EXTINF attributes understood by the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attribute {
    GroupTitle,
    TvgLogo,
}

impl Attribute {
    pub const ALL: [Attribute; 2] = [Attribute::GroupTitle, Attribute::TvgLogo];

    /// Attribute key as written in the playlist (case-sensitive)
    pub fn key(&self) -> &'static str {
        match self {
            Attribute::GroupTitle => "group-title",
            Attribute::TvgLogo => "tvg-logo",
        }
    }

    fn index(&self) -> usize {
        match self {
            Attribute::GroupTitle => 0,
            Attribute::TvgLogo => 1,
        }
    }

    fn pattern(&self) -> &'static Regex {
        static PATTERNS: OnceLock<[Regex; 2]> = OnceLock::new();
        let patterns = PATTERNS.get_or_init(|| {
            Attribute::ALL.map(|attribute| {
                attribute_pattern(attribute.key()).expect("static attribute pattern")
            })
        });
        &patterns[self.index()]
    }
}

/// Metadata extracted from one EXTINF line, borrowed from the line itself
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryMetadata<'a> {
    pub name: &'a str,
    pub group: &'a str,
    pub artwork: Option<&'a str>,
}

/// Build the `key="value"` search pattern for an arbitrary attribute key
pub fn attribute_pattern(key: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!(r#"{}="([^"]*)""#, regex::escape(key)))
}

/// Value of the first `key="value"` occurrence in `line`
///
/// Any content between the quotes is accepted, including an empty value.
pub fn extract_attribute(line: &str, attribute: Attribute) -> Option<&str> {
    capture_value(attribute.pattern(), line)
}

/// Same lookup as [`extract_attribute`] with a caller-compiled pattern
pub fn capture_value<'a>(pattern: &Regex, line: &'a str) -> Option<&'a str> {
    pattern
        .captures(line)
        .and_then(|captures| captures.get(1))
        .map(|value| value.as_str())
}

/// Display name: text after the last comma, or the whole line when no comma exists
pub fn extract_name(line: &str) -> &str {
    match line.rfind(',') {
        Some(comma_pos) => line[comma_pos + 1..].trim(),
        None => line.trim(),
    }
}

/// Parse an EXTINF line into its display metadata
///
/// Missing `group-title` yields [`UNCATEGORIZED`]; missing `tvg-logo` yields
/// no artwork. Never fails.
pub fn parse_metadata(line: &str) -> EntryMetadata<'_> {
    EntryMetadata {
        name: extract_name(line),
        group: extract_attribute(line, Attribute::GroupTitle).unwrap_or(UNCATEGORIZED),
        artwork: extract_attribute(line, Attribute::TvgLogo),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_LINE: &str = r#"#EXTINF:-1 tvg-id="bbc1.uk" tvg-name="BBC One" tvg-logo="http://logos/bbc.png" group-title="News",BBC One HD"#;

    #[test]
    fn test_parse_full_metadata() {
        let metadata = parse_metadata(FULL_LINE);
        assert_eq!(metadata.name, "BBC One HD");
        assert_eq!(metadata.group, "News");
        assert_eq!(metadata.artwork, Some("http://logos/bbc.png"));
    }

    #[test]
    fn test_ad_hoc_attribute_pattern() {
        let pattern = attribute_pattern("tvg-id").unwrap();
        assert_eq!(capture_value(&pattern, FULL_LINE), Some("bbc1.uk"));
        assert_eq!(capture_value(&pattern, "#EXTINF:-1,No Id"), None);
    }

    #[test]
    fn test_missing_group_defaults_to_uncategorized() {
        let metadata = parse_metadata("#EXTINF:-1,Some Channel");
        assert_eq!(metadata.group, UNCATEGORIZED);
        assert_eq!(metadata.artwork, None);
    }

    #[test]
    fn test_empty_attribute_value_is_present() {
        let line = r#"#EXTINF:-1 tvg-logo="" group-title="",Blank"#;
        assert_eq!(extract_attribute(line, Attribute::GroupTitle), Some(""));
        assert_eq!(parse_metadata(line).artwork, Some(""));
    }

    #[test]
    fn test_attribute_key_is_case_sensitive() {
        let line = r#"#EXTINF:-1 Group-Title="News",BBC"#;
        assert_eq!(extract_attribute(line, Attribute::GroupTitle), None);
        assert_eq!(parse_metadata(line).group, UNCATEGORIZED);
    }

    #[test]
    fn test_value_may_contain_commas_and_spaces() {
        let line = r#"#EXTINF:-1 group-title="Movies, Drama & More",Film"#;
        // name comes from the segment after the last comma
        assert_eq!(parse_metadata(line).name, "Film");
        assert_eq!(parse_metadata(line).group, "Movies, Drama & More");
    }

    #[test]
    fn test_name_uses_last_comma() {
        assert_eq!(extract_name("#EXTINF:-1,Part One, Part Two"), "Part Two");
        assert_eq!(extract_name("#EXTINF:-1 group-title=\"A\",  Padded  "), "Padded");
    }

    #[test]
    fn test_name_without_comma_is_whole_line() {
        assert_eq!(extract_name("  #EXTINF:-1  "), "#EXTINF:-1");
    }

    #[test]
    fn test_unterminated_value_is_absent() {
        let line = r#"#EXTINF:-1 group-title="News,BBC"#;
        assert_eq!(extract_attribute(line, Attribute::GroupTitle), None);
    }

    #[test]
    fn test_custom_attribute_pattern() {
        let pattern = attribute_pattern("tvg-chno").unwrap();
        assert_eq!(
            capture_value(&pattern, r#"#EXTINF:-1 tvg-chno="101",Channel"#),
            Some("101")
        );
    }
}
