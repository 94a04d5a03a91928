use crate::core::Viewport;
use crate::error::TimelineResult;
use crate::render::{LabelPrimitive, PointPrimitive, RenderCommand, Renderer};

/// Renderer that keeps every validated command in submission order.
///
/// Used by tests to assert highlight ordering; `take_commands` drains the log
/// between interactions.
#[derive(Debug)]
pub struct RecordingRenderer {
    pub surface: Viewport,
    commands: Vec<RenderCommand>,
}

impl RecordingRenderer {
    #[must_use]
    pub fn new(surface: Viewport) -> Self {
        Self {
            surface,
            commands: Vec::new(),
        }
    }

    #[must_use]
    pub fn commands(&self) -> &[RenderCommand] {
        &self.commands
    }

    pub fn take_commands(&mut self) -> Vec<RenderCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn points(&self) -> impl Iterator<Item = &PointPrimitive> {
        self.commands.iter().filter_map(|command| match command {
            RenderCommand::Point(point) => Some(point),
            _ => None,
        })
    }

    pub fn labels(&self) -> impl Iterator<Item = &LabelPrimitive> {
        self.commands.iter().filter_map(|command| match command {
            RenderCommand::ArtistLabel(label) => Some(label),
            _ => None,
        })
    }
}

impl Renderer for RecordingRenderer {
    fn surface_size(&self) -> Viewport {
        self.surface
    }

    fn render(&mut self, command: RenderCommand) -> TimelineResult<()> {
        command.validate()?;
        self.commands.push(command);
        Ok(())
    }
}
