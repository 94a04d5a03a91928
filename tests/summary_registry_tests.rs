mod support;

use std::collections::HashMap;
use std::sync::Arc;

use scrobble_timeline::core::{PointCollection, Scrobble, SummaryRegistry};

use support::scrobble;

fn with_album(base: Arc<Scrobble>, album: &str, playcount: u32, track: &str) -> Arc<Scrobble> {
    let mut scrobble = (*base).clone();
    scrobble.album.name = album.to_owned();
    scrobble.album.playcount = playcount;
    scrobble.track.name = track.to_owned();
    Arc::new(scrobble)
}

#[test]
fn repeated_artist_contributes_latest_playcount_once() {
    let scrobbles = vec![
        scrobble(0, 100, "A", 5),
        scrobble(1, 200, "B", 3),
        scrobble(2, 300, "A", 5),
    ];
    let registry = SummaryRegistry::new(&scrobbles);

    assert_eq!(registry.max_artist_playcount(), 5);
    assert_eq!(registry.get_playcount_totals().0, 8);

    let collection = PointCollection::from_sorted(scrobbles).expect("collection");
    let first = collection.get_first().expect("first");
    let peer = collection
        .get_adjacent(first, 1, |candidate| candidate.artist.playcount == 5)
        .expect("row peer");
    assert_eq!(peer.index, 2);
}

#[test]
fn growing_playcount_replaces_previous_contribution() {
    let scrobbles = vec![
        with_album(scrobble(0, 100, "A", 4), "First", 2, "x"),
        with_album(scrobble(1, 200, "A", 6), "First", 3, "y"),
        with_album(scrobble(2, 300, "B", 1), "Other", 1, "z"),
    ];
    let registry = SummaryRegistry::new(&scrobbles);

    assert_eq!(registry.get_max_playcounts(), (6, 3));
    assert_eq!(registry.get_playcount_totals(), (7, 4));
}

#[test]
fn max_playcounts_match_brute_force_over_latest_values() {
    let scrobbles: Vec<Arc<Scrobble>> = (0..40)
        .map(|index| {
            let artist = format!("artist-{}", index % 7);
            let playcount = ((index * 13) % 17 + 1) as u32;
            with_album(
                scrobble(index, index as i64 * 60_000, &artist, playcount),
                &format!("album-{}", index % 5),
                ((index * 7) % 11 + 1) as u32,
                "t",
            )
        })
        .collect();
    let registry = SummaryRegistry::new(&scrobbles);

    let mut artists: HashMap<&str, u32> = HashMap::new();
    let mut albums: HashMap<(&str, &str), u32> = HashMap::new();
    for scrobble in &scrobbles {
        artists.insert(scrobble.artist.name.as_str(), scrobble.artist.playcount);
        albums.insert(
            (scrobble.artist.name.as_str(), scrobble.album.name.as_str()),
            scrobble.album.playcount,
        );
    }

    assert_eq!(
        registry.get_max_playcounts(),
        (
            artists.values().copied().max().unwrap_or(0),
            albums.values().copied().max().unwrap_or(0)
        )
    );
    assert_eq!(
        registry.get_playcount_totals().0,
        artists.values().map(|playcount| u64::from(*playcount)).sum::<u64>()
    );
}

#[test]
fn totals_report_counts_and_rank() {
    let scrobbles = vec![
        with_album(scrobble(0, 100, "A", 9), "Alpha", 4, "one"),
        with_album(scrobble(1, 200, "B", 12), "Beta", 7, "two"),
        with_album(scrobble(2, 300, "A", 9), "Alpha", 4, "one"),
        with_album(scrobble(3, 400, "A", 9), "Gamma", 2, "three"),
    ];
    let registry = SummaryRegistry::new(&scrobbles);
    let totals = registry.get_totals(&scrobbles[2]);

    assert_eq!(totals.artist_playcount, 9);
    assert_eq!(totals.artist_scrobble_count, 3);
    assert_eq!(totals.artist_rank, 2);
    assert_eq!(totals.artist_count, 2);
    assert_eq!(totals.album_playcount, 4);
    assert_eq!(totals.album_scrobble_count, 2);
    assert_eq!(totals.track_scrobble_count, 2);
}

#[test]
fn summary_describes_the_whole_dataset() {
    let day = 24 * 60 * 60 * 1000;
    let scrobbles = vec![
        with_album(scrobble(0, 0, "A", 2), "Alpha", 1, "one"),
        with_album(scrobble(1, day, "B", 1), "Beta", 1, "two"),
        with_album(scrobble(2, 2 * day, "A", 2), "Alpha", 1, "one"),
        with_album(scrobble(3, 2 * day + 1, "A", 2), "Alpha", 1, "four"),
    ];
    let summary = SummaryRegistry::new(&scrobbles).get_summary().clone();

    assert_eq!(summary.first_scrobble_date, "t0");
    assert_eq!(summary.last_scrobble_date, format!("t{}", 2 * day + 1));
    assert_eq!(summary.scrobble_count, 4);
    assert_eq!(summary.artist_count, 2);
    assert_eq!(summary.album_count, 2);
    assert_eq!(summary.track_count, 3);
    approx::assert_relative_eq!(summary.per_day_count, 1.3);
}
