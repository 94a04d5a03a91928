#![allow(dead_code)]

use std::sync::Arc;

use scrobble_timeline::TimelineConfig;
use scrobble_timeline::core::{Album, Artist, Scrobble, Track, Viewport};
use scrobble_timeline::dataset::{Dataset, GenreTable, RawScrobble};

pub const SURFACE: Viewport = Viewport {
    width: 1000,
    height: 500,
};

pub fn raw(
    date_time: &str,
    track: &str,
    album: &str,
    album_playcount: u32,
    artist: &str,
    artist_playcount: u32,
) -> RawScrobble {
    RawScrobble {
        date_time: date_time.to_owned(),
        track: track.to_owned(),
        album: album.to_owned(),
        album_playcount,
        artist: artist.to_owned(),
        artist_playcount,
    }
}

/// Ten scrobbles, one per hour on 2024-01-01, listed out of order.
pub fn fixture_raw() -> Vec<RawScrobble> {
    vec![
        raw("2024-01-01 09:00", "Debaser", "Doolittle", 3, "Pixies", 5),
        raw("2024-01-01 00:00", "Paranoid", "Paranoid", 8, "Black Sabbath", 12),
        raw("2024-01-01 01:00", "Creep", "Pablo Honey", 4, "Radiohead", 9),
        raw("2024-01-01 02:00", "Everlong", "The Colour and the Shape", 5, "Foo Fighters", 7),
        raw("2024-01-01 03:00", "Windowlicker", "Windowlicker", 3, "Aphex Twin", 9),
        raw("2024-01-01 04:00", "Karma Police", "OK Computer", 6, "Radiohead", 9),
        raw("2024-01-01 05:00", "Iron Man", "Paranoid", 8, "Black Sabbath", 12),
        raw("2024-01-01 06:00", "Basement Tape", "Demo", 1, "Garage Band", 2),
        raw("2024-01-01 07:00", "Creep", "Pablo Honey", 4, "Radiohead", 9),
        raw("2024-01-01 08:00", "Second Tape", "Demo", 1, "Garage Band", 2),
    ]
}

pub fn fixture_genres() -> GenreTable {
    GenreTable::default()
        .with_genre("Heavy Metal", ["Black Sabbath"])
        .with_genre("Alternative Rock", ["Radiohead", "Pixies"])
        .with_genre("Rock", ["Foo Fighters"])
        .with_genre("Electronic", ["Aphex Twin"])
}

pub fn fixture_dataset(config: &TimelineConfig) -> Arc<Dataset> {
    Arc::new(
        Dataset::from_raw(fixture_raw(), &fixture_genres(), config).expect("fixture dataset"),
    )
}

/// Scrobble built by hand, without genre resolution.
pub fn scrobble(index: usize, timestamp: i64, artist: &str, artist_playcount: u32) -> Arc<Scrobble> {
    Arc::new(Scrobble {
        index,
        timestamp,
        date: format!("t{timestamp}"),
        track: Track {
            name: format!("track-{index}"),
        },
        album: Album {
            name: format!("{artist} album"),
            playcount: 1,
        },
        artist: Artist {
            name: artist.to_owned(),
            playcount: artist_playcount,
            genre: None,
            genre_group: None,
        },
    })
}
