use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{TimelineError, TimelineResult};

/// HSL color: hue in degrees, saturation and lightness in `0..=1`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    #[must_use]
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Multiplies saturation and lightness, clamping both into `[0, 1]`.
    #[must_use]
    pub fn scaled(self, factors: ColorValueFactors) -> Self {
        Self {
            h: self.h,
            s: (self.s * factors.saturation).clamp(0.0, 1.0),
            l: (self.l * factors.lightness).clamp(0.0, 1.0),
        }
    }

    pub fn validate(self) -> TimelineResult<()> {
        if !self.h.is_finite() {
            return Err(TimelineError::InvalidData(
                "color hue must be finite".to_owned(),
            ));
        }
        for (channel, value) in [("saturation", self.s), ("lightness", self.l)] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(TimelineError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }

    /// Interpolates along the shorter hue arc.
    #[must_use]
    pub fn interpolate(self, other: Self, t: f64) -> Self {
        let mut hue_delta = (other.h - self.h) % 360.0;
        if hue_delta > 180.0 {
            hue_delta -= 360.0;
        } else if hue_delta < -180.0 {
            hue_delta += 360.0;
        }
        let mut h = (self.h + hue_delta * t).rem_euclid(360.0);
        // rem_euclid of a tiny negative hue rounds up to 360
        if h >= 360.0 {
            h = 0.0;
        }
        Self {
            h,
            s: self.s + (other.s - self.s) * t,
            l: self.l + (other.l - self.l) * t,
        }
    }
}

/// Saturation/lightness multipliers for one highlight context.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorValueFactors {
    pub saturation: f64,
    pub lightness: f64,
}

impl ColorValueFactors {
    #[must_use]
    pub const fn new(saturation: f64, lightness: f64) -> Self {
        Self {
            saturation,
            lightness,
        }
    }
}

/// Multiplier pairs for the three highlight contexts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HighlightFactors {
    pub genre: ColorValueFactors,
    pub artist: ColorValueFactors,
    pub other: ColorValueFactors,
}

/// Which selection emphasized a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HighlightContext {
    GenreHighlighted,
    ArtistSelected,
    Default,
}

impl HighlightFactors {
    #[must_use]
    pub fn for_context(self, context: HighlightContext) -> ColorValueFactors {
        match context {
            HighlightContext::GenreHighlighted => self.genre,
            HighlightContext::ArtistSelected => self.artist,
            HighlightContext::Default => self.other,
        }
    }
}

/// Sequential scale from `[1, max_value]` onto a two-stop HSL range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SequentialColorScale {
    max_value: f64,
    from: Hsl,
    to: Hsl,
}

impl SequentialColorScale {
    #[must_use]
    pub fn new(max_value: u32, range: [Hsl; 2]) -> Self {
        Self {
            max_value: f64::from(max_value.max(1)),
            from: range[0],
            to: range[1],
        }
    }

    #[must_use]
    pub fn color(self, value: u32) -> Hsl {
        let span = self.max_value - 1.0;
        let t = if span <= 0.0 {
            0.5
        } else {
            ((f64::from(value) - 1.0) / span).clamp(0.0, 1.0)
        };
        self.from.interpolate(self.to, t)
    }
}

/// Maps `(genre group, album popularity, highlight context)` to a color.
///
/// Unknown or missing genre groups fall back to the neutral scale. The mapper
/// holds no mutable state, so equal inputs always produce equal colors.
#[derive(Debug, Clone)]
pub struct ColorMapper {
    group_scales: IndexMap<String, SequentialColorScale>,
    unknown_scale: SequentialColorScale,
    factors: HighlightFactors,
}

impl ColorMapper {
    #[must_use]
    pub fn new<'a>(
        max_album_playcount: u32,
        group_ranges: impl IntoIterator<Item = (&'a str, [Hsl; 2])>,
        unknown_range: [Hsl; 2],
        factors: HighlightFactors,
    ) -> Self {
        Self {
            group_scales: group_ranges
                .into_iter()
                .map(|(group, range)| {
                    (
                        group.to_owned(),
                        SequentialColorScale::new(max_album_playcount, range),
                    )
                })
                .collect(),
            unknown_scale: SequentialColorScale::new(max_album_playcount, unknown_range),
            factors,
        }
    }

    #[must_use]
    pub fn color_for(
        &self,
        genre_group: Option<&str>,
        popularity: u32,
        context: HighlightContext,
    ) -> Hsl {
        let scale = genre_group
            .and_then(|group| self.group_scales.get(group))
            .unwrap_or(&self.unknown_scale);
        scale
            .color(popularity)
            .scaled(self.factors.for_context(context))
    }

    #[must_use]
    pub fn factors(&self) -> HighlightFactors {
        self.factors
    }
}
