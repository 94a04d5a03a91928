use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::Scrobble;

const MS_IN_DAY: i64 = 24 * 60 * 60 * 1000;

/// Dataset-wide counts shown by the intro readout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetSummary {
    pub first_scrobble_date: String,
    pub last_scrobble_date: String,
    pub scrobble_count: usize,
    pub per_day_count: f64,
    pub artist_count: usize,
    pub album_count: usize,
    pub track_count: usize,
    pub max_artist_playcount: u32,
    pub max_album_playcount: u32,
    pub artist_playcount_total: u64,
    pub album_playcount_total: u64,
}

/// Totals displayed next to one selected scrobble.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrobbleTotals {
    pub artist_playcount: u32,
    pub artist_scrobble_count: usize,
    /// 1-based rank of the artist by playcount among all artists.
    pub artist_rank: usize,
    pub artist_count: usize,
    pub album_playcount: u32,
    pub album_scrobble_count: usize,
    pub track_scrobble_count: usize,
}

#[derive(Debug, Clone, Copy, Default)]
struct EntityTotals {
    playcount: u32,
    scrobble_count: usize,
}

/// Aggregates computed once over the full, immutable dataset.
///
/// A scrobble's playcount is the entity's cumulative count at collection time,
/// so each entity contributes its latest-seen playcount exactly once: a repeat
/// replaces the previous contribution instead of adding to it.
#[derive(Debug, Clone)]
pub struct SummaryRegistry {
    artists: HashMap<String, EntityTotals>,
    albums: HashMap<(String, String), EntityTotals>,
    tracks: HashMap<(String, String), usize>,
    artist_ranks: HashMap<String, usize>,
    max_artist_playcount: u32,
    max_album_playcount: u32,
    artist_playcount_total: u64,
    album_playcount_total: u64,
    summary: DatasetSummary,
}

impl SummaryRegistry {
    #[must_use]
    pub fn new(scrobbles: &[impl AsRef<Scrobble>]) -> Self {
        let mut artists: HashMap<String, EntityTotals> = HashMap::new();
        let mut albums: HashMap<(String, String), EntityTotals> = HashMap::new();
        let mut tracks: HashMap<(String, String), usize> = HashMap::new();
        let mut artist_playcount_total: u64 = 0;
        let mut album_playcount_total: u64 = 0;

        for scrobble in scrobbles {
            let scrobble = scrobble.as_ref();
            let artist_name = &scrobble.artist.name;

            let artist = artists.entry(artist_name.clone()).or_default();
            artist_playcount_total = artist_playcount_total - u64::from(artist.playcount)
                + u64::from(scrobble.artist.playcount);
            artist.playcount = scrobble.artist.playcount;
            artist.scrobble_count += 1;

            let album = albums
                .entry((artist_name.clone(), scrobble.album.name.clone()))
                .or_default();
            album_playcount_total = album_playcount_total - u64::from(album.playcount)
                + u64::from(scrobble.album.playcount);
            album.playcount = scrobble.album.playcount;
            album.scrobble_count += 1;

            *tracks
                .entry((artist_name.clone(), scrobble.track.name.clone()))
                .or_default() += 1;
        }

        let max_artist_playcount = artists.values().map(|e| e.playcount).max().unwrap_or(0);
        let max_album_playcount = albums.values().map(|e| e.playcount).max().unwrap_or(0);

        let mut ranked: Vec<(&String, u32)> = artists
            .iter()
            .map(|(name, totals)| (name, totals.playcount))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        let artist_ranks = ranked
            .iter()
            .enumerate()
            .map(|(position, (name, _))| ((*name).clone(), position + 1))
            .collect();

        let first = scrobbles.first().map(AsRef::as_ref);
        let last = scrobbles.last().map(AsRef::as_ref);
        let summary = DatasetSummary {
            first_scrobble_date: first.map(|s| s.date.clone()).unwrap_or_default(),
            last_scrobble_date: last.map(|s| s.date.clone()).unwrap_or_default(),
            scrobble_count: scrobbles.len(),
            per_day_count: per_day_count(
                scrobbles.len(),
                first.map_or(0, |s| s.timestamp),
                last.map_or(0, |s| s.timestamp),
            ),
            artist_count: artists.len(),
            album_count: albums.len(),
            track_count: tracks.len(),
            max_artist_playcount,
            max_album_playcount,
            artist_playcount_total,
            album_playcount_total,
        };

        debug!(
            scrobble_count = summary.scrobble_count,
            artist_count = summary.artist_count,
            max_artist_playcount,
            max_album_playcount,
            "summary registry built"
        );

        Self {
            artists,
            albums,
            tracks,
            artist_ranks,
            max_artist_playcount,
            max_album_playcount,
            artist_playcount_total,
            album_playcount_total,
            summary,
        }
    }

    /// `(max artist playcount, max album playcount)`.
    #[must_use]
    pub fn get_max_playcounts(&self) -> (u32, u32) {
        (self.max_artist_playcount, self.max_album_playcount)
    }

    #[must_use]
    pub fn max_artist_playcount(&self) -> u32 {
        self.max_artist_playcount
    }

    #[must_use]
    pub fn max_album_playcount(&self) -> u32 {
        self.max_album_playcount
    }

    /// `(artist playcount total, album playcount total)` over distinct entities.
    #[must_use]
    pub fn get_playcount_totals(&self) -> (u64, u64) {
        (self.artist_playcount_total, self.album_playcount_total)
    }

    #[must_use]
    pub fn get_summary(&self) -> &DatasetSummary {
        &self.summary
    }

    #[must_use]
    pub fn get_totals(&self, scrobble: &Scrobble) -> ScrobbleTotals {
        let artist_name = &scrobble.artist.name;
        let artist = self.artists.get(artist_name).copied().unwrap_or_default();
        let album = self
            .albums
            .get(&(artist_name.clone(), scrobble.album.name.clone()))
            .copied()
            .unwrap_or_default();
        let track_scrobble_count = self
            .tracks
            .get(&(artist_name.clone(), scrobble.track.name.clone()))
            .copied()
            .unwrap_or(0);

        ScrobbleTotals {
            artist_playcount: artist.playcount,
            artist_scrobble_count: artist.scrobble_count,
            artist_rank: self.artist_ranks.get(artist_name).copied().unwrap_or(0),
            artist_count: self.artists.len(),
            album_playcount: album.playcount,
            album_scrobble_count: album.scrobble_count,
            track_scrobble_count,
        }
    }
}

/// Scrobbles per day over the dataset span, rounded to one decimal.
fn per_day_count(scrobble_count: usize, first_timestamp: i64, last_timestamp: i64) -> f64 {
    let span = (last_timestamp - first_timestamp).max(0);
    let day_count = ((span + MS_IN_DAY - 1) / MS_IN_DAY).max(1);
    (10.0 * scrobble_count as f64 / day_count as f64).round() / 10.0
}
