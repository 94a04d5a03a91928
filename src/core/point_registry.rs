use std::borrow::Borrow;
use std::hash::Hash;

use indexmap::IndexMap;

use crate::core::Point;

/// Key extractor grouping points by genre.
#[must_use]
pub fn genre_key(point: &Point) -> Option<String> {
    point.scrobble.artist.genre.clone()
}

/// Key extractor grouping points by artist name.
#[must_use]
pub fn artist_key(point: &Point) -> Option<String> {
    Some(point.scrobble.artist.name.clone())
}

/// Group-by index over the points of the most recent draw pass.
///
/// Groups keep draw order and are listed in first-seen order. Points whose
/// extractor yields `None` are not registered.
#[derive(Debug, Clone)]
pub struct PointRegistry<K, F = fn(&Point) -> Option<K>> {
    key_extractor: F,
    groups: IndexMap<K, Vec<Point>>,
}

impl<K, F> PointRegistry<K, F>
where
    K: Hash + Eq,
    F: Fn(&Point) -> Option<K>,
{
    #[must_use]
    pub fn new(key_extractor: F) -> Self {
        Self {
            key_extractor,
            groups: IndexMap::new(),
        }
    }

    pub fn put_point(&mut self, point: Point) {
        if let Some(key) = (self.key_extractor)(&point) {
            self.groups.entry(key).or_default().push(point);
        }
    }

    /// Points registered under `key` in the current draw pass.
    ///
    /// A miss is expected: a genre may have no points inside the zoomed range.
    #[must_use]
    pub fn get_point_list<Q>(&self, key: &Q) -> Option<&[Point]>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.groups.get(key).map(Vec::as_slice)
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.groups.keys()
    }

    #[must_use]
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    pub fn reset(&mut self) {
        self.groups.clear();
    }
}

impl PointRegistry<String> {
    #[must_use]
    pub fn by_genre() -> Self {
        Self::new(genre_key)
    }

    #[must_use]
    pub fn by_artist() -> Self {
        Self::new(artist_key)
    }
}
