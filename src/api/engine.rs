use std::sync::Arc;

use tracing::debug;

use crate::core::{
    ColorMapper, PixelPosition, PlotScales, PointBuffer, PointCollection, PointRegistry, Scrobble,
    SummaryRegistry, ZoomViewport,
};
use crate::dataset::Dataset;
use crate::error::TimelineResult;
use crate::interaction::{Debouncer, SelectionState};
use crate::render::Renderer;

use super::TimelineConfig;

/// Interactive timeline over one immutable dataset.
///
/// Owns the draw-pass indexes (hit-test buffer, genre and artist registries),
/// the zoom viewport, the selection state and the renderer. Every handler runs
/// to completion; a handler that changes highlights first restores whatever
/// it highlighted before.
pub struct TimelineEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: TimelineConfig,
    pub(super) dataset: Arc<Dataset>,
    pub(super) zoomed: PointCollection<Arc<Scrobble>>,
    pub(super) zoom: ZoomViewport,
    pub(super) summary: SummaryRegistry,
    pub(super) color_mapper: ColorMapper,
    pub(super) point_buffer: PointBuffer,
    pub(super) genre_registry: PointRegistry<String>,
    pub(super) artist_registry: PointRegistry<String>,
    pub(super) plot_scales: Option<PlotScales>,
    pub(super) selection: SelectionState,
    pub(super) highlighted: PointCollection<PixelPosition>,
    pub(super) resize: Debouncer,
}

impl<R: Renderer> TimelineEngine<R> {
    pub fn new(renderer: R, dataset: Arc<Dataset>, config: TimelineConfig) -> TimelineResult<Self> {
        config.validate()?;

        let full = dataset.scrobbles();
        let summary = SummaryRegistry::new(full.all());
        let color_mapper = ColorMapper::new(
            summary.max_album_playcount(),
            config
                .genre_groups
                .iter()
                .map(|(group, group_config)| (group.as_str(), group_config.color_range)),
            config.unknown_genre_color_range,
            config.point.color_value_factors,
        );
        let zoom = ZoomViewport::for_collection(full, config.zoom_tuning())?;
        let zoomed = full.clone();

        debug!(
            scrobble_count = full.len(),
            genre_group_count = config.genre_groups.len(),
            "timeline engine created"
        );

        Ok(Self {
            renderer,
            point_buffer: PointBuffer::new(config.point.half_size()),
            resize: Debouncer::new(config.resize_debounce()),
            config,
            dataset,
            zoomed,
            zoom,
            summary,
            color_mapper,
            genre_registry: PointRegistry::by_genre(),
            artist_registry: PointRegistry::by_artist(),
            plot_scales: None,
            selection: SelectionState::Idle,
            highlighted: PointCollection::new(),
        })
    }

    /// First full draw plus the intro readout.
    pub fn render_initial(&mut self) -> TimelineResult<()> {
        self.draw()?;
        self.reset_ui()
    }

    #[must_use]
    pub fn config(&self) -> &TimelineConfig {
        &self.config
    }

    #[must_use]
    pub fn dataset(&self) -> &Arc<Dataset> {
        &self.dataset
    }

    #[must_use]
    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    #[must_use]
    pub fn zoomed_range(&self) -> (f64, f64) {
        self.zoom.zoomed_range()
    }

    #[must_use]
    pub fn full_range(&self) -> (f64, f64) {
        self.zoom.full_range()
    }

    #[must_use]
    pub fn zoomed_scrobbles(&self) -> &PointCollection<Arc<Scrobble>> {
        &self.zoomed
    }

    #[must_use]
    pub fn summary(&self) -> &SummaryRegistry {
        &self.summary
    }

    #[must_use]
    pub fn color_mapper(&self) -> &ColorMapper {
        &self.color_mapper
    }

    #[must_use]
    pub fn point_buffer(&self) -> &PointBuffer {
        &self.point_buffer
    }

    #[must_use]
    pub fn genre_registry(&self) -> &PointRegistry<String> {
        &self.genre_registry
    }

    #[must_use]
    pub fn artist_registry(&self) -> &PointRegistry<String> {
        &self.artist_registry
    }

    #[must_use]
    pub fn plot_scales(&self) -> Option<PlotScales> {
        self.plot_scales
    }

    /// Pixel positions currently drawn with a highlight color.
    #[must_use]
    pub fn highlighted_positions(&self) -> &[PixelPosition] {
        self.highlighted.all()
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
