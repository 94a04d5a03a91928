use std::time::Duration;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{ColorValueFactors, HighlightFactors, Hsl, PlotGeometry, ZoomTuning};
use crate::error::{TimelineError, TimelineResult};

/// Plotted point appearance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointConfig {
    /// Point footprint in pixels.
    #[serde(default = "default_point_size")]
    pub size: f64,
    /// Largest vertical gap between playcount rows.
    #[serde(default = "default_point_max_margin")]
    pub max_margin: f64,
    /// Color of the selected track's scrobbles.
    #[serde(default = "default_selected_color")]
    pub selected_color: Hsl,
    #[serde(default = "default_color_value_factors")]
    pub color_value_factors: HighlightFactors,
}

impl Default for PointConfig {
    fn default() -> Self {
        Self {
            size: default_point_size(),
            max_margin: default_point_max_margin(),
            selected_color: default_selected_color(),
            color_value_factors: default_color_value_factors(),
        }
    }
}

impl PointConfig {
    /// Half the footprint, rounded up to whole pixels.
    #[must_use]
    pub fn half_size(&self) -> u32 {
        (self.size / 2.0).ceil().max(1.0) as u32
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotConfig {
    #[serde(default = "default_plot_padding")]
    pub padding: f64,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            padding: default_plot_padding(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeAxisConfig {
    #[serde(default = "default_time_axis_width")]
    pub width: f64,
}

impl Default for TimeAxisConfig {
    fn default() -> Self {
        Self {
            width: default_time_axis_width(),
        }
    }
}

/// A cluster of related genres sharing one color family.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenreGroupConfig {
    pub genres: Vec<String>,
    pub color_range: [Hsl; 2],
}

/// Timeline bootstrap configuration.
///
/// Serializable with camelCase keys so hosts can ship it as JSON next to the
/// dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineConfig {
    #[serde(default)]
    pub debug: bool,
    #[serde(default)]
    pub point: PointConfig,
    #[serde(default)]
    pub plot: PlotConfig,
    #[serde(default)]
    pub time_axis: TimeAxisConfig,
    #[serde(default = "default_zoom_delta_factor")]
    pub zoom_delta_factor: f64,
    /// Smallest zoomed time span in milliseconds.
    #[serde(default = "default_min_time_range")]
    pub min_time_range: f64,
    #[serde(default = "default_resize_debounce_ms")]
    pub resize_debounce_ms: u64,
    #[serde(default = "default_unknown_genre_color_range")]
    pub unknown_genre_color_range: [Hsl; 2],
    #[serde(default = "default_genre_groups")]
    pub genre_groups: IndexMap<String, GenreGroupConfig>,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            debug: false,
            point: PointConfig::default(),
            plot: PlotConfig::default(),
            time_axis: TimeAxisConfig::default(),
            zoom_delta_factor: default_zoom_delta_factor(),
            min_time_range: default_min_time_range(),
            resize_debounce_ms: default_resize_debounce_ms(),
            unknown_genre_color_range: default_unknown_genre_color_range(),
            genre_groups: default_genre_groups(),
        }
    }
}

impl TimelineConfig {
    /// Parses and validates a JSON config; missing keys take defaults.
    pub fn from_json_str(json: &str) -> TimelineResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_string_pretty(&self) -> TimelineResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    #[must_use]
    pub fn with_genre_group(mut self, name: impl Into<String>, group: GenreGroupConfig) -> Self {
        self.genre_groups.insert(name.into(), group);
        self
    }

    #[must_use]
    pub fn with_min_time_range(mut self, min_time_range: f64) -> Self {
        self.min_time_range = min_time_range;
        self
    }

    #[must_use]
    pub fn with_zoom_delta_factor(mut self, zoom_delta_factor: f64) -> Self {
        self.zoom_delta_factor = zoom_delta_factor;
        self
    }

    #[must_use]
    pub fn resize_debounce(&self) -> Duration {
        Duration::from_millis(self.resize_debounce_ms)
    }

    #[must_use]
    pub fn zoom_tuning(&self) -> ZoomTuning {
        ZoomTuning {
            zoom_delta_factor: self.zoom_delta_factor,
            min_time_range: self.min_time_range,
            plot_padding: self.plot.padding,
        }
    }

    #[must_use]
    pub fn plot_geometry(&self) -> PlotGeometry {
        PlotGeometry {
            padding: self.plot.padding,
            time_axis_width: self.time_axis.width,
            point_size: self.point.size,
            point_max_margin: self.point.max_margin,
        }
    }

    pub fn validate(&self) -> TimelineResult<()> {
        for (name, value) in [
            ("point.size", self.point.size),
            ("minTimeRange", self.min_time_range),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(TimelineError::InvalidConfig(format!(
                    "`{name}` must be finite and > 0"
                )));
            }
        }

        for (name, value) in [
            ("point.maxMargin", self.point.max_margin),
            ("plot.padding", self.plot.padding),
            ("timeAxis.width", self.time_axis.width),
            ("zoomDeltaFactor", self.zoom_delta_factor),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(TimelineError::InvalidConfig(format!(
                    "`{name}` must be finite and >= 0"
                )));
            }
        }

        let factors = self.point.color_value_factors;
        for (context, pair) in [
            ("genre", factors.genre),
            ("artist", factors.artist),
            ("other", factors.other),
        ] {
            if !pair.saturation.is_finite()
                || !pair.lightness.is_finite()
                || pair.saturation < 0.0
                || pair.lightness < 0.0
            {
                return Err(TimelineError::InvalidConfig(format!(
                    "`point.colorValueFactors.{context}` must be finite and >= 0"
                )));
            }
        }

        let invalid_color = |name: &str, err: TimelineError| {
            TimelineError::InvalidConfig(format!("`{name}`: {err}"))
        };
        self.point
            .selected_color
            .validate()
            .map_err(|err| invalid_color("point.selectedColor", err))?;
        for color in self.unknown_genre_color_range {
            color
                .validate()
                .map_err(|err| invalid_color("unknownGenreColorRange", err))?;
        }
        for (group, group_config) in &self.genre_groups {
            for color in group_config.color_range {
                color
                    .validate()
                    .map_err(|err| invalid_color(&format!("genreGroups.{group}"), err))?;
            }
        }

        Ok(())
    }
}

fn default_point_size() -> f64 {
    6.0
}

fn default_point_max_margin() -> f64 {
    4.0
}

fn default_selected_color() -> Hsl {
    Hsl::new(0.0, 0.0, 1.0)
}

fn default_color_value_factors() -> HighlightFactors {
    HighlightFactors {
        genre: ColorValueFactors::new(1.4, 1.25),
        artist: ColorValueFactors::new(1.6, 1.5),
        other: ColorValueFactors::new(0.6, 0.7),
    }
}

fn default_plot_padding() -> f64 {
    20.0
}

fn default_time_axis_width() -> f64 {
    2.0
}

fn default_zoom_delta_factor() -> f64 {
    0.005
}

fn default_min_time_range() -> f64 {
    // one hour
    3_600_000.0
}

fn default_resize_debounce_ms() -> u64 {
    100
}

fn default_unknown_genre_color_range() -> [Hsl; 2] {
    [Hsl::new(0.0, 0.0, 0.25), Hsl::new(0.0, 0.0, 0.6)]
}

fn default_genre_groups() -> IndexMap<String, GenreGroupConfig> {
    let group = |genres: &[&str], from: Hsl, to: Hsl| GenreGroupConfig {
        genres: genres.iter().map(|genre| (*genre).to_owned()).collect(),
        color_range: [from, to],
    };

    IndexMap::from([
        (
            "Rock".to_owned(),
            group(
                &["Rock", "Classic Rock", "Hard Rock", "Alternative Rock", "Indie Rock"],
                Hsl::new(5.0, 0.55, 0.35),
                Hsl::new(15.0, 0.8, 0.55),
            ),
        ),
        (
            "Metal".to_owned(),
            group(
                &["Metal", "Heavy Metal", "Thrash Metal", "Progressive Metal"],
                Hsl::new(270.0, 0.35, 0.3),
                Hsl::new(285.0, 0.6, 0.5),
            ),
        ),
        (
            "Electronic".to_owned(),
            group(
                &["Electronic", "House", "Techno", "Ambient", "Trip-Hop"],
                Hsl::new(190.0, 0.5, 0.3),
                Hsl::new(200.0, 0.8, 0.55),
            ),
        ),
        (
            "Pop".to_owned(),
            group(
                &["Pop", "Synthpop", "Indie Pop"],
                Hsl::new(320.0, 0.5, 0.4),
                Hsl::new(330.0, 0.8, 0.6),
            ),
        ),
        (
            "Hip-Hop".to_owned(),
            group(
                &["Hip-Hop", "Rap", "Trap"],
                Hsl::new(45.0, 0.55, 0.35),
                Hsl::new(50.0, 0.85, 0.55),
            ),
        ),
        (
            "Jazz".to_owned(),
            group(
                &["Jazz", "Blues", "Soul", "Funk"],
                Hsl::new(120.0, 0.35, 0.3),
                Hsl::new(135.0, 0.6, 0.5),
            ),
        ),
    ])
}
