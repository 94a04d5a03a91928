use std::sync::Arc;

#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;
use tracing::{debug, trace};

use crate::core::{
    ColorMapper, HighlightContext, PlotScales, Point, PointBuffer, PointRegistry, Scrobble,
};
use crate::error::TimelineResult;
use crate::render::{PointPrimitive, RenderCommand, Renderer, TimeLabelSlot};

use super::TimelineEngine;

fn project_scrobble(
    scrobble: &Arc<Scrobble>,
    scales: &PlotScales,
    color_mapper: &ColorMapper,
) -> Point {
    let (x, y) = scales.project(scrobble.timestamp, scrobble.artist.playcount);
    Point {
        scrobble: Arc::clone(scrobble),
        x,
        y,
        color: color_mapper.color_for(
            scrobble.artist.genre_group.as_deref(),
            scrobble.album.playcount,
            HighlightContext::Default,
        ),
    }
}

impl<R: Renderer> TimelineEngine<R> {
    /// Projects the zoomed scrobbles for the current surface and redraws them.
    ///
    /// The hit-test buffer and both registries are rebuilt off to the side and
    /// swapped in whole, so callers never observe a half-populated index.
    pub fn draw(&mut self) -> TimelineResult<()> {
        let viewport = self.renderer.surface_size();
        // the zoomed subset carries one neighbor past each zoom edge, so the
        // domain spans the subset itself to keep every point on the plot
        let time_domain = (
            self.zoomed.get_first()?.timestamp as f64,
            self.zoomed.get_last()?.timestamp as f64,
        );
        let scales = PlotScales::compute(
            viewport,
            self.config.plot_geometry(),
            time_domain,
            self.summary.max_artist_playcount(),
        )?;
        let points = self.project_points(&scales);

        let mut point_buffer = PointBuffer::new(self.config.point.half_size());
        let mut genre_registry = PointRegistry::by_genre();
        let mut artist_registry = PointRegistry::by_artist();
        for point in &points {
            point_buffer.put_point(point.clone());
            genre_registry.put_point(point.clone());
            artist_registry.put_point(point.clone());
        }
        self.point_buffer = point_buffer;
        self.genre_registry = genre_registry;
        self.artist_registry = artist_registry;
        self.plot_scales = Some(scales);

        self.renderer.render(RenderCommand::Background)?;
        for point in &points {
            self.renderer
                .render(RenderCommand::Point(PointPrimitive::new(
                    point.x,
                    point.y,
                    point.color,
                )))?;
        }

        let (start_x, end_x) = scales.x.range();
        self.renderer
            .render(RenderCommand::TimeAxis { start_x, end_x })?;

        let container_width = f64::from(viewport.width);
        for (slot, scrobble) in [
            (TimeLabelSlot::FirstScrobble, self.zoomed.get_first()?),
            (TimeLabelSlot::LastScrobble, self.zoomed.get_last()?),
        ] {
            self.renderer.render(RenderCommand::TimeLabel {
                slot,
                x: scales.x.map(scrobble.timestamp as f64),
                container_width,
                text: scrobble.date.clone(),
            })?;
        }

        debug!(
            point_count = points.len(),
            width = viewport.width,
            height = viewport.height,
            "draw pass complete"
        );
        Ok(())
    }

    fn project_points(&self, scales: &PlotScales) -> Vec<Point> {
        #[cfg(feature = "parallel-projection")]
        {
            let color_mapper = &self.color_mapper;
            return self
                .zoomed
                .all()
                .par_iter()
                .map(|scrobble| project_scrobble(scrobble, scales, color_mapper))
                .collect();
        }

        #[cfg(not(feature = "parallel-projection"))]
        {
            self.zoomed
                .iter()
                .map(|scrobble| project_scrobble(scrobble, scales, &self.color_mapper))
                .collect()
        }
    }

    /// Drops indexes, highlights and selection ahead of a full redraw.
    pub(super) fn reset_state(&mut self) {
        self.point_buffer.reset();
        self.genre_registry.reset();
        self.artist_registry.reset();
        self.highlighted.reset();
        self.selection = crate::interaction::SelectionState::Idle;
        trace!("timeline state reset");
    }

    /// Returns the readout, labels and legend to their intro state.
    pub(super) fn reset_ui(&mut self) -> TimelineResult<()> {
        self.renderer.render(RenderCommand::ShowIntro(Box::new(
            self.summary.get_summary().clone(),
        )))?;
        self.renderer.render(RenderCommand::ClearSelectedTimeLabel)?;
        self.renderer.render(RenderCommand::ClearLegendHighlight)?;
        self.renderer.render(RenderCommand::ClearArtistLabels)
    }
}
