mod null_renderer;
mod primitives;
mod recording_renderer;

pub use null_renderer::NullRenderer;
pub use primitives::{
    LabelPrimitive, PointPrimitive, RenderCommand, ScrobbleInfo, TimeLabelSlot,
};
pub use recording_renderer::RecordingRenderer;

use crate::core::Viewport;
use crate::error::TimelineResult;

/// Contract implemented by the drawing surface.
///
/// The core never draws itself: it emits validated commands in the exact
/// order they must be applied. `surface_size` is queried at handling time so a
/// resize is picked up only once the host has settled the new dimensions.
pub trait Renderer {
    fn surface_size(&self) -> Viewport;
    fn render(&mut self, command: RenderCommand) -> TimelineResult<()>;
}
