use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::core::Hsl;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Album {
    pub name: String,
    pub playcount: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artist {
    pub name: String,
    pub playcount: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre_group: Option<String>,
}

/// One recorded play event.
///
/// `index` is the position in the full, time-ascending dataset and never
/// changes with zoom. Playcounts are cumulative entity totals captured when the
/// dataset was collected, not per-scrobble increments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scrobble {
    pub index: usize,
    pub timestamp: i64,
    pub date: String,
    pub track: Track,
    pub album: Album,
    pub artist: Artist,
}

/// Items stored in a sorted `PointCollection`.
pub trait TimeOrdered {
    fn timestamp(&self) -> i64;
    fn index(&self) -> usize;
}

impl TimeOrdered for Scrobble {
    fn timestamp(&self) -> i64 {
        self.timestamp
    }

    fn index(&self) -> usize {
        self.index
    }
}

impl<T: TimeOrdered + ?Sized> TimeOrdered for Arc<T> {
    fn timestamp(&self) -> i64 {
        (**self).timestamp()
    }

    fn index(&self) -> usize {
        (**self).index()
    }
}

/// A scrobble projected for one draw pass.
///
/// Points are rebuilt wholesale on every draw and never patched in place.
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    pub scrobble: Arc<Scrobble>,
    pub x: f64,
    pub y: f64,
    pub color: Hsl,
}

impl Point {
    #[must_use]
    pub fn position(&self) -> PixelPosition {
        PixelPosition::new(self.x, self.y)
    }
}

impl TimeOrdered for Point {
    fn timestamp(&self) -> i64 {
        self.scrobble.timestamp
    }

    fn index(&self) -> usize {
        self.scrobble.index
    }
}

/// Pixel position of a point whose color was temporarily overridden.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelPosition {
    pub x: f64,
    pub y: f64,
}

impl PixelPosition {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}
