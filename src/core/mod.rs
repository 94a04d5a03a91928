pub mod color;
pub mod date;
pub mod plot_layout;
pub mod point_buffer;
pub mod point_collection;
pub mod point_registry;
pub mod scale;
pub mod summary_registry;
pub mod types;
pub mod zoom_viewport;

pub use color::{
    ColorMapper, ColorValueFactors, HighlightContext, HighlightFactors, Hsl,
    SequentialColorScale,
};
pub use plot_layout::{PlotGeometry, PlotScales};
pub use point_buffer::PointBuffer;
pub use point_collection::PointCollection;
pub use point_registry::{PointRegistry, artist_key, genre_key};
pub use scale::LinearScale;
pub use summary_registry::{DatasetSummary, ScrobbleTotals, SummaryRegistry};
pub use types::{Album, Artist, PixelPosition, Point, Scrobble, TimeOrdered, Track, Viewport};
pub use zoom_viewport::{ZoomOutcome, ZoomTuning, ZoomViewport};
