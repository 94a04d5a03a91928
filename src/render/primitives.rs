use crate::core::{DatasetSummary, Hsl, Scrobble, ScrobbleTotals};
use crate::error::{TimelineError, TimelineResult};
use std::sync::Arc;

/// Draw command for one plotted scrobble.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointPrimitive {
    pub x: f64,
    pub y: f64,
    pub color: Hsl,
}

impl PointPrimitive {
    #[must_use]
    pub const fn new(x: f64, y: f64, color: Hsl) -> Self {
        Self { x, y, color }
    }

    pub fn validate(self) -> TimelineResult<()> {
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(TimelineError::InvalidData(
                "point coordinates must be finite".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Artist name label anchored at an artist's last drawn point.
///
/// `is_primary` marks the selected artist's label; genre peers are secondary.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelPrimitive {
    pub x: f64,
    pub y: f64,
    pub container_width: f64,
    pub text: String,
    pub color: Hsl,
    pub is_primary: bool,
}

impl LabelPrimitive {
    pub fn validate(&self) -> TimelineResult<()> {
        if self.text.is_empty() {
            return Err(TimelineError::InvalidData(
                "label text must not be empty".to_owned(),
            ));
        }
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(TimelineError::InvalidData(
                "label coordinates must be finite".to_owned(),
            ));
        }
        if !self.container_width.is_finite() || self.container_width <= 0.0 {
            return Err(TimelineError::InvalidData(
                "label container width must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Time-axis label slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeLabelSlot {
    FirstScrobble,
    LastScrobble,
    SelectedScrobble,
}

/// Info readout for one selected scrobble.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrobbleInfo {
    pub scrobble: Arc<Scrobble>,
    pub totals: ScrobbleTotals,
}

/// Everything the core asks the render layer to do.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    /// Clears the plot before a full redraw.
    Background,
    Point(PointPrimitive),
    TimeAxis {
        start_x: f64,
        end_x: f64,
    },
    TimeLabel {
        slot: TimeLabelSlot,
        x: f64,
        container_width: f64,
        text: String,
    },
    ClearSelectedTimeLabel,
    ArtistLabel(LabelPrimitive),
    ClearArtistLabels,
    HighlightLegendGenre(String),
    ClearLegendHighlight,
    ShowIntro(Box<DatasetSummary>),
    ShowScrobbleInfo(Box<ScrobbleInfo>),
}

impl RenderCommand {
    pub fn validate(&self) -> TimelineResult<()> {
        match self {
            Self::Point(point) => point.validate(),
            Self::ArtistLabel(label) => label.validate(),
            Self::TimeAxis { start_x, end_x } => {
                if !start_x.is_finite() || !end_x.is_finite() {
                    return Err(TimelineError::InvalidData(
                        "time axis bounds must be finite".to_owned(),
                    ));
                }
                Ok(())
            }
            Self::TimeLabel {
                x, container_width, ..
            } => {
                if !x.is_finite() || !container_width.is_finite() {
                    return Err(TimelineError::InvalidData(
                        "time label geometry must be finite".to_owned(),
                    ));
                }
                Ok(())
            }
            Self::HighlightLegendGenre(genre) if genre.is_empty() => Err(
                TimelineError::InvalidData("legend genre must not be empty".to_owned()),
            ),
            _ => Ok(()),
        }
    }
}
