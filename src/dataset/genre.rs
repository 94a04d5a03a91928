use std::collections::HashMap;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::api::GenreGroupConfig;
use crate::core::{HighlightFactors, Hsl, Scrobble};

/// Dataset-wide genre assignment: genre -> artist names.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GenreTable {
    artists_by_genre: IndexMap<String, Vec<String>>,
}

impl GenreTable {
    #[must_use]
    pub fn new(artists_by_genre: IndexMap<String, Vec<String>>) -> Self {
        Self { artists_by_genre }
    }

    pub fn from_json_str(json: &str) -> crate::error::TimelineResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    #[must_use]
    pub fn with_genre<I, S>(mut self, genre: impl Into<String>, artists: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.artists_by_genre
            .entry(genre.into())
            .or_default()
            .extend(artists.into_iter().map(Into::into));
        self
    }
}

/// Resolves artists to genres and genres to configured genre groups.
#[derive(Debug, Clone, Default)]
pub struct GenreResolver {
    genre_by_artist: HashMap<String, String>,
    group_by_genre: HashMap<String, String>,
}

impl GenreResolver {
    #[must_use]
    pub fn new(table: &GenreTable, genre_groups: &IndexMap<String, GenreGroupConfig>) -> Self {
        let group_by_genre = genre_groups
            .iter()
            .flat_map(|(group, config)| {
                config
                    .genres
                    .iter()
                    .map(move |genre| (genre.clone(), group.clone()))
            })
            .collect();

        // later genres win when an artist is listed twice
        let genre_by_artist = table
            .artists_by_genre
            .iter()
            .flat_map(|(genre, artists)| {
                artists
                    .iter()
                    .map(move |artist| (artist.clone(), genre.clone()))
            })
            .collect();

        Self {
            genre_by_artist,
            group_by_genre,
        }
    }

    /// `(genre, genre group)` for an artist; the group is `None` when the
    /// genre is not part of any configured group.
    #[must_use]
    pub fn resolve(&self, artist_name: &str) -> Option<(String, Option<String>)> {
        let genre = self.genre_by_artist.get(artist_name)?;
        Some((genre.clone(), self.group_by_genre.get(genre).cloned()))
    }

    /// Fills `artist.genre` / `artist.genre_group` in place.
    pub fn apply(&self, scrobble: &mut Scrobble) {
        if let Some((genre, group)) = self.resolve(&scrobble.artist.name) {
            scrobble.artist.genre = Some(genre);
            scrobble.artist.genre_group = group;
        }
    }
}

/// One legend row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenreLegendEntry {
    pub name: String,
    pub group: String,
    pub artist_count: usize,
    pub playcount: u64,
    pub color: Hsl,
    pub highlighted_color: Hsl,
}

/// Genres present in the dataset, most played first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenreLegend {
    entries: Vec<GenreLegendEntry>,
}

#[derive(Default)]
struct GenreAccumulator {
    group: Option<String>,
    artist_count: usize,
    playcount: u64,
}

impl GenreLegend {
    /// Builds legend rows from resolved scrobbles.
    ///
    /// A genre's playcount sums the latest-seen playcount of each of its
    /// artists. Genres whose group is not configured are skipped.
    #[must_use]
    pub fn from_scrobbles(
        scrobbles: &[impl AsRef<Scrobble>],
        genre_groups: &IndexMap<String, GenreGroupConfig>,
        factors: HighlightFactors,
    ) -> Self {
        let mut genres: IndexMap<&str, GenreAccumulator> = IndexMap::new();
        let mut artist_playcounts: HashMap<&str, u32> = HashMap::new();

        for scrobble in scrobbles {
            let artist = &scrobble.as_ref().artist;
            let Some(genre) = artist.genre.as_deref() else {
                continue;
            };

            let record = genres.entry(genre).or_default();
            if record.group.is_none() {
                record.group = artist.genre_group.clone();
            }
            match artist_playcounts.insert(&artist.name, artist.playcount) {
                Some(previous) => {
                    record.playcount =
                        record.playcount - u64::from(previous) + u64::from(artist.playcount);
                }
                None => {
                    record.artist_count += 1;
                    record.playcount += u64::from(artist.playcount);
                }
            }
        }

        let mut entries: Vec<GenreLegendEntry> = Vec::with_capacity(genres.len());
        for (genre, record) in genres {
            let Some((group, group_config)) = record
                .group
                .as_deref()
                .and_then(|group| genre_groups.get_key_value(group))
            else {
                warn!(genre, "genre group not found in config, skipping legend entry");
                continue;
            };

            let [base_color, _] = group_config.color_range;
            entries.push(GenreLegendEntry {
                name: genre.to_owned(),
                group: group.clone(),
                artist_count: record.artist_count,
                playcount: record.playcount,
                color: base_color.scaled(factors.other),
                highlighted_color: base_color.scaled(factors.genre),
            });
        }

        // stable: ties keep first-seen order
        entries.sort_by(|a, b| b.playcount.cmp(&a.playcount));
        debug!(genre_count = entries.len(), "genre legend built");

        Self { entries }
    }

    #[must_use]
    pub fn entries(&self) -> &[GenreLegendEntry] {
        &self.entries
    }

    #[must_use]
    pub fn entry(&self, genre: &str) -> Option<&GenreLegendEntry> {
        self.entries.iter().find(|entry| entry.name == genre)
    }
}
