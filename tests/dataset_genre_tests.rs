mod support;

use scrobble_timeline::TimelineError;
use scrobble_timeline::api::TimelineConfig;
use scrobble_timeline::dataset::{Dataset, GenreResolver, GenreTable};

use support::{fixture_genres, fixture_raw, raw};

#[test]
fn raw_scrobbles_are_sorted_indexed_and_tagged() {
    let config = TimelineConfig::default();
    let dataset = Dataset::from_raw(fixture_raw(), &fixture_genres(), &config).expect("dataset");
    let scrobbles = dataset.scrobbles();

    assert_eq!(scrobbles.len(), 10);
    for (position, scrobble) in scrobbles.iter().enumerate() {
        assert_eq!(scrobble.index, position);
    }

    let first = scrobbles.get_first().expect("first");
    assert_eq!(first.artist.name, "Black Sabbath");
    assert_eq!(first.date, "2024-01-01 00:00");
    assert_eq!(first.artist.genre.as_deref(), Some("Heavy Metal"));
    assert_eq!(first.artist.genre_group.as_deref(), Some("Metal"));

    let last = scrobbles.get_last().expect("last");
    assert_eq!(last.artist.name, "Pixies");
    assert_eq!(last.artist.genre_group.as_deref(), Some("Rock"));
}

#[test]
fn equal_timestamps_keep_input_order() {
    let config = TimelineConfig::default();
    let dataset = Dataset::from_raw(
        vec![
            raw("2024-01-01 10:00", "b", "B", 1, "Second", 1),
            raw("2024-01-01 09:00", "a", "A", 1, "First", 1),
            raw("2024-01-01 10:00", "c", "C", 1, "Third", 1),
        ],
        &GenreTable::default(),
        &config,
    )
    .expect("dataset");

    let artists: Vec<&str> = dataset
        .scrobbles()
        .iter()
        .map(|scrobble| scrobble.artist.name.as_str())
        .collect();
    assert_eq!(artists, vec!["First", "Second", "Third"]);
}

#[test]
fn malformed_date_time_is_rejected() {
    let result = Dataset::from_raw(
        vec![raw("yesterday", "a", "A", 1, "X", 1)],
        &GenreTable::default(),
        &TimelineConfig::default(),
    );
    assert!(matches!(result, Err(TimelineError::InvalidData(_))));
}

#[test]
fn genre_without_configured_group_keeps_genre_only() {
    let table = GenreTable::default().with_genre("Polka", ["Frankie Yankovic"]);
    let resolver = GenreResolver::new(&table, &TimelineConfig::default().genre_groups);

    assert_eq!(
        resolver.resolve("Frankie Yankovic"),
        Some(("Polka".to_owned(), None))
    );
    assert_eq!(resolver.resolve("Nobody"), None);
}

#[test]
fn genre_table_parses_from_json() {
    let table = GenreTable::from_json_str(r#"{ "Techno": ["Jeff Mills", "Robert Hood"] }"#)
        .expect("genre table");
    let resolver = GenreResolver::new(&table, &TimelineConfig::default().genre_groups);

    assert_eq!(
        resolver.resolve("Robert Hood"),
        Some(("Techno".to_owned(), Some("Electronic".to_owned())))
    );
}

#[test]
fn legend_sums_latest_artist_playcounts_per_genre() {
    let config = TimelineConfig::default();
    let dataset = Dataset::from_raw(fixture_raw(), &fixture_genres(), &config).expect("dataset");
    let legend = dataset.legend();

    let names: Vec<&str> = legend
        .entries()
        .iter()
        .map(|entry| entry.name.as_str())
        .collect();
    assert_eq!(names, vec!["Alternative Rock", "Heavy Metal", "Electronic", "Rock"]);

    let alternative = legend.entry("Alternative Rock").expect("entry");
    assert_eq!(alternative.playcount, 14);
    assert_eq!(alternative.artist_count, 2);
    assert_eq!(alternative.group, "Rock");
    assert!(alternative.highlighted_color.l > alternative.color.l);
}

#[test]
fn legend_skips_genres_without_configured_group() {
    let config = TimelineConfig::default();
    let table = fixture_genres().with_genre("Polka", ["Garage Band"]);
    let dataset = Dataset::from_raw(fixture_raw(), &table, &config).expect("dataset");

    assert!(dataset.legend().entry("Polka").is_none());
    let garage = dataset
        .scrobbles()
        .iter()
        .find(|scrobble| scrobble.artist.name == "Garage Band")
        .expect("garage scrobble");
    assert_eq!(garage.artist.genre.as_deref(), Some("Polka"));
}

#[test]
fn missing_genre_artists_lists_repeat_offenders() {
    let config = TimelineConfig::default();
    let mut records = fixture_raw();
    records.push(raw("2024-01-02 00:00", "Once", "Single", 1, "One Hit", 1));
    let dataset = Dataset::from_raw(records, &fixture_genres(), &config).expect("dataset");

    assert_eq!(
        dataset.missing_genre_artists(),
        vec![("Garage Band".to_owned(), 2)]
    );
}

#[test]
fn empty_input_is_rejected() {
    let result = Dataset::from_raw(Vec::new(), &GenreTable::default(), &TimelineConfig::default());
    assert!(matches!(result, Err(TimelineError::EmptyCollection)));
}
