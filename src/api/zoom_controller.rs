use tracing::debug;

use crate::core::ZoomOutcome;
use crate::error::TimelineResult;
use crate::render::Renderer;

use super::TimelineEngine;

impl<R: Renderer> TimelineEngine<R> {
    /// Zooms around the pointer.
    ///
    /// An accepted zoom rebuilds the visible subset, clears the selection,
    /// redraws and returns the UI to its intro state. A rejected zoom changes
    /// nothing.
    pub fn wheel(&mut self, offset_x: f64, delta_y: f64) -> TimelineResult<ZoomOutcome> {
        let plot_width = f64::from(self.renderer.surface_size().width);
        let outcome = self.zoom.apply_wheel_zoom(offset_x, delta_y, plot_width)?;

        match outcome {
            ZoomOutcome::Rejected => {
                debug!(offset_x, delta_y, "zoom rejected below minimum time range");
            }
            ZoomOutcome::Applied { start, end } => {
                self.zoomed = self.zoom.visible_subset(self.dataset.scrobbles())?;
                self.reset_state();
                self.draw()?;
                self.reset_ui()?;
                debug!(
                    start,
                    end,
                    visible = self.zoomed.len(),
                    "zoom applied"
                );
            }
        }

        Ok(outcome)
    }

    /// Returns to the full time range and redraws.
    pub fn reset_zoom(&mut self) -> TimelineResult<()> {
        self.zoom.reset_to_full();
        self.zoomed = self.dataset.scrobbles().clone();
        self.reset_state();
        self.draw()?;
        self.reset_ui()
    }
}
