use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::TimelineConfig;
use crate::core::date::{date_time_to_timestamp, timestamp_to_date_time};
use crate::core::{Album, Artist, PointCollection, Scrobble, Track};
use crate::error::{TimelineError, TimelineResult};

use super::{GenreLegend, GenreResolver, GenreTable};

/// Scrobble record as delivered by the (external) loader.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawScrobble {
    /// `"YYYY-MM-DD HH:MM"`, UTC.
    pub date_time: String,
    pub track: String,
    pub album: String,
    pub album_playcount: u32,
    pub artist: String,
    pub artist_playcount: u32,
}

/// Full, immutable dataset for one time period.
#[derive(Debug, Clone)]
pub struct Dataset {
    scrobbles: PointCollection<Arc<Scrobble>>,
    legend: GenreLegend,
}

impl Dataset {
    /// Parses, sorts (stable, by timestamp), indexes and genre-tags raw records.
    pub fn from_raw(
        raw: Vec<RawScrobble>,
        genres: &GenreTable,
        config: &TimelineConfig,
    ) -> TimelineResult<Self> {
        let mut timed = raw
            .into_iter()
            .map(|record| Ok((date_time_to_timestamp(&record.date_time)?, record)))
            .collect::<TimelineResult<Vec<_>>>()?;
        timed.sort_by_key(|(timestamp, _)| *timestamp);

        let resolver = GenreResolver::new(genres, &config.genre_groups);
        let scrobbles = timed
            .into_iter()
            .enumerate()
            .map(|(index, (timestamp, record))| {
                let mut scrobble = Scrobble {
                    index,
                    timestamp,
                    date: timestamp_to_date_time(timestamp)?,
                    track: Track { name: record.track },
                    album: Album {
                        name: record.album,
                        playcount: record.album_playcount,
                    },
                    artist: Artist {
                        name: record.artist,
                        playcount: record.artist_playcount,
                        genre: None,
                        genre_group: None,
                    },
                };
                resolver.apply(&mut scrobble);
                Ok(Arc::new(scrobble))
            })
            .collect::<TimelineResult<Vec<_>>>()?;

        Self::from_scrobbles(scrobbles, config)
    }

    /// Wraps already-prepared scrobbles.
    ///
    /// Scrobbles must be sorted by timestamp with `index` equal to position.
    pub fn from_scrobbles(
        scrobbles: Vec<Arc<Scrobble>>,
        config: &TimelineConfig,
    ) -> TimelineResult<Self> {
        if scrobbles.is_empty() {
            return Err(TimelineError::EmptyCollection);
        }
        if let Some((position, scrobble)) = scrobbles
            .iter()
            .enumerate()
            .find(|(position, scrobble)| scrobble.index != *position)
        {
            return Err(TimelineError::InvalidData(format!(
                "scrobble at position {position} carries index {}",
                scrobble.index
            )));
        }

        let legend = GenreLegend::from_scrobbles(
            &scrobbles,
            &config.genre_groups,
            config.point.color_value_factors,
        );
        let scrobbles = PointCollection::from_sorted(scrobbles)?;
        debug!(scrobble_count = scrobbles.len(), "dataset prepared");

        Ok(Self { scrobbles, legend })
    }

    #[must_use]
    pub fn scrobbles(&self) -> &PointCollection<Arc<Scrobble>> {
        &self.scrobbles
    }

    #[must_use]
    pub fn legend(&self) -> &GenreLegend {
        &self.legend
    }

    /// Artists without a genre that were scrobbled more than once, most
    /// scrobbled first (ties by name).
    #[must_use]
    pub fn missing_genre_artists(&self) -> Vec<(String, usize)> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for scrobble in &self.scrobbles {
            if scrobble.artist.genre.is_none() {
                *counts.entry(scrobble.artist.name.as_str()).or_default() += 1;
            }
        }

        let mut missing: Vec<(String, usize)> = counts
            .into_iter()
            .filter(|(_, count)| *count > 1)
            .map(|(name, count)| (name.to_owned(), count))
            .collect();
        missing.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        missing
    }
}
