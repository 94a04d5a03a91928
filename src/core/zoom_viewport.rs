use serde::{Deserialize, Serialize};

use crate::core::{LinearScale, PointCollection, TimeOrdered};
use crate::error::{TimelineError, TimelineResult};

/// Wheel-zoom tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomTuning {
    /// Zoom sensitivity per wheel delta unit.
    pub zoom_delta_factor: f64,
    /// Smallest visible time span in milliseconds.
    pub min_time_range: f64,
    /// Horizontal plot padding in pixels on each side.
    pub plot_padding: f64,
}

/// Result of one wheel-zoom request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ZoomOutcome {
    Applied { start: f64, end: f64 },
    /// The candidate span fell below `min_time_range`, or the wheel delta
    /// gave a non-positive zoom factor; nothing changed.
    Rejected,
}

impl ZoomOutcome {
    #[must_use]
    pub fn is_applied(self) -> bool {
        matches!(self, Self::Applied { .. })
    }
}

/// Visible time window over a fixed full dataset range.
///
/// The zoomed range always stays inside `[full_start, full_end]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomViewport {
    full_start: f64,
    full_end: f64,
    zoomed_start: f64,
    zoomed_end: f64,
    tuning: ZoomTuning,
}

impl ZoomViewport {
    pub fn new(first_timestamp: i64, last_timestamp: i64, tuning: ZoomTuning) -> TimelineResult<Self> {
        if first_timestamp > last_timestamp {
            return Err(TimelineError::InvalidData(
                "zoom viewport needs first timestamp <= last timestamp".to_owned(),
            ));
        }
        if !tuning.zoom_delta_factor.is_finite() || tuning.zoom_delta_factor < 0.0 {
            return Err(TimelineError::InvalidData(
                "zoom delta factor must be finite and >= 0".to_owned(),
            ));
        }
        if !tuning.min_time_range.is_finite() || tuning.min_time_range <= 0.0 {
            return Err(TimelineError::InvalidData(
                "min time range must be finite and > 0".to_owned(),
            ));
        }

        let (full_start, full_end) = (first_timestamp as f64, last_timestamp as f64);
        Ok(Self {
            full_start,
            full_end,
            zoomed_start: full_start,
            zoomed_end: full_end,
            tuning,
        })
    }

    pub fn for_collection<T: TimeOrdered>(
        collection: &PointCollection<T>,
        tuning: ZoomTuning,
    ) -> TimelineResult<Self> {
        Self::new(
            collection.get_first()?.timestamp(),
            collection.get_last()?.timestamp(),
            tuning,
        )
    }

    #[must_use]
    pub fn full_range(&self) -> (f64, f64) {
        (self.full_start, self.full_end)
    }

    #[must_use]
    pub fn zoomed_range(&self) -> (f64, f64) {
        (self.zoomed_start, self.zoomed_end)
    }

    #[must_use]
    pub fn tuning(&self) -> ZoomTuning {
        self.tuning
    }

    pub fn reset_to_full(&mut self) {
        self.zoomed_start = self.full_start;
        self.zoomed_end = self.full_end;
    }

    /// Maps a pointer x offset back to a timestamp inside the zoomed range.
    ///
    /// The padded plot width is mapped linearly onto the zoomed range; the
    /// offset is clamped into the padded area and the result rounded to ms.
    pub fn pointer_timestamp(&self, offset_x: f64, plot_width: f64) -> TimelineResult<f64> {
        if !offset_x.is_finite() || !plot_width.is_finite() {
            return Err(TimelineError::InvalidData(
                "pointer offset and plot width must be finite".to_owned(),
            ));
        }
        let padded_width = (plot_width - 2.0 * self.tuning.plot_padding).max(0.0);
        let time_scale =
            LinearScale::rounded((0.0, padded_width), (self.zoomed_start, self.zoomed_end))?;
        // rounding may step just outside a fractional zoomed range
        Ok(time_scale
            .map_clamped(offset_x - self.tuning.plot_padding)
            .clamp(self.zoomed_start, self.zoomed_end))
    }

    /// Converts a wheel delta into a span divisor.
    ///
    /// Positive deltas zoom out (factor below one), negative deltas zoom in.
    /// Deltas large enough to reach zero or below are not clamped.
    #[must_use]
    pub fn zoom_factor(&self, delta_y: f64) -> f64 {
        1.0 - delta_y * self.tuning.zoom_delta_factor
    }

    /// Zooms around the timestamp under the pointer.
    ///
    /// Left and right spans around the anchor are divided by the zoom factor
    /// and the result is clamped to the full range. Candidates narrower than
    /// `min_time_range` are rejected without touching state, as is any delta
    /// whose zoom factor is zero or negative.
    pub fn apply_wheel_zoom(
        &mut self,
        offset_x: f64,
        delta_y: f64,
        plot_width: f64,
    ) -> TimelineResult<ZoomOutcome> {
        if !delta_y.is_finite() {
            return Err(TimelineError::InvalidData(
                "wheel delta must be finite".to_owned(),
            ));
        }

        let anchor = self.pointer_timestamp(offset_x, plot_width)?;
        let zoom_factor = self.zoom_factor(delta_y);
        if zoom_factor <= 0.0 {
            return Ok(ZoomOutcome::Rejected);
        }
        let left_span = (anchor - self.zoomed_start) / zoom_factor;
        let right_span = (self.zoomed_end - anchor) / zoom_factor;

        if left_span + right_span < self.tuning.min_time_range {
            return Ok(ZoomOutcome::Rejected);
        }

        self.zoomed_start = (anchor - left_span).max(self.full_start);
        self.zoomed_end = (anchor + right_span).min(self.full_end);

        Ok(ZoomOutcome::Applied {
            start: self.zoomed_start,
            end: self.zoomed_end,
        })
    }

    /// Items of `full` covering the zoomed range, including the nearest
    /// neighbor just outside each edge.
    ///
    /// The slice runs from `get_previous(start)` to `get_next(end)` inclusive.
    pub fn visible_subset<T: TimeOrdered + Clone>(
        &self,
        full: &PointCollection<T>,
    ) -> TimelineResult<PointCollection<T>> {
        let start = self.zoomed_start.floor() as i64;
        let end = self.zoomed_end.ceil() as i64;
        let locate = |item: &T| {
            full.position_of(item).ok_or_else(|| {
                TimelineError::InvalidData(format!(
                    "item with index {} is not part of the collection",
                    item.index()
                ))
            })
        };
        let first_position = locate(full.get_previous(start)?)?;
        let last_position = locate(full.get_next(end)?)?;
        full.slice_inclusive(first_position, last_position)
    }
}
