use m3u_catalog::ingestor::parse_playlist_subset;
use m3u_catalog::models::{EntryKind, Profile, UNCATEGORIZED};

const BBC: &str = "#EXTINF:-1 group-title=\"News\",BBC\nhttp://x/bbc.m3u8";

#[test]
fn live_profile_keeps_broadcast_channel() {
    let catalog = parse_playlist_subset(BBC, Profile::Live);

    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog[0].label, "News");
    assert_eq!(catalog[0].members.len(), 1);

    let entry = &catalog[0].members[0];
    assert_eq!(entry.name, "BBC");
    assert_eq!(entry.group, "News");
    assert_eq!(entry.locator, "http://x/bbc.m3u8");
    assert_eq!(entry.kind, EntryKind::Live);
    assert!(entry.artwork.is_none());
}

#[test]
fn movies_profile_drops_broadcast_channel() {
    assert!(parse_playlist_subset(BBC, Profile::Movies).is_empty());
}

#[test]
fn movies_profile_keeps_film() {
    let content = "#EXTINF:-1 group-title=\"Action Movies\",Die Hard\nhttp://x/diehard.mkv";
    let catalog = parse_playlist_subset(content, Profile::Movies);

    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog[0].label, "Action Movies");
    assert_eq!(catalog[0].members[0].name, "Die Hard");
    assert_eq!(catalog[0].members[0].kind, EntryKind::OnDemand);
}

#[test]
fn season_group_outranks_file_extension() {
    let content = "#EXTINF:-1 group-title=\"Season 1\",Pilot\nhttp://x/s01e01.mkv";

    let series = parse_playlist_subset(content, Profile::Series);
    assert_eq!(series.len(), 1);
    assert_eq!(series[0].members[0].kind, EntryKind::Series);

    assert!(parse_playlist_subset(content, Profile::Movies).is_empty());
}

#[test]
fn missing_group_title_is_uncategorized() {
    let content = "#EXTINF:-1 tvg-logo=\"http://logo/a.png\",Somewhere\nhttp://x/a.m3u8";
    let catalog = parse_playlist_subset(content, Profile::Live);

    assert_eq!(catalog[0].label, UNCATEGORIZED);
    assert_eq!(catalog[0].members[0].group, UNCATEGORIZED);
    assert_eq!(
        catalog[0].members[0].artwork.as_deref(),
        Some("http://logo/a.png")
    );
}

#[test]
fn orphaned_metadata_produces_nothing() {
    let content = "#EXTM3U\n#EXTINF:-1,Lost\n#EXTINF:-1,Found\nhttp://x/found\n#EXTINF:-1,Trailing";
    let catalog = parse_playlist_subset(content, Profile::Live);

    let names: Vec<_> = catalog
        .iter()
        .flat_map(|c| c.members.iter().map(|e| e.name.as_str()))
        .collect();
    assert_eq!(names, vec!["Found"]);
}

#[test]
fn orphaned_url_is_ignored() {
    let content = "http://x/stray\n#EXTINF:-1,Kept\nhttp://x/kept\nhttp://x/second";
    let catalog = parse_playlist_subset(content, Profile::Live);

    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog[0].members.len(), 1);
    assert_eq!(catalog[0].members[0].locator, "http://x/kept");
}

#[test]
fn unknown_directives_and_blank_lines_are_skipped() {
    let content = "#EXTM3U\n\n#EXTINF:-1 group-title=\"News\",BBC\n#EXTVLCOPT:http-user-agent=VLC\n\n   http://x/bbc.m3u8   \n";
    let catalog = parse_playlist_subset(content, Profile::Live);

    assert_eq!(catalog[0].members[0].locator, "http://x/bbc.m3u8");
}

#[test]
fn admin_profile_yields_empty_catalog() {
    assert!(parse_playlist_subset(BBC, Profile::Admin).is_empty());
}

#[test]
fn empty_text_yields_empty_catalog() {
    for profile in Profile::all() {
        assert!(parse_playlist_subset("", *profile).is_empty());
    }
}

#[test]
fn categories_keep_first_seen_member_order() {
    let content = "\
#EXTINF:-1 group-title=\"Sports\",Zeta
http://x/z
#EXTINF:-1 group-title=\"News\",Alpha
http://x/a
#EXTINF:-1 group-title=\"Sports\",Beta
http://x/b
";
    let catalog = parse_playlist_subset(content, Profile::Live);

    assert_eq!(catalog[0].label, "News");
    let sports: Vec<_> = catalog[1].members.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(sports, vec!["Zeta", "Beta"]);
}
