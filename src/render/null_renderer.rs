use crate::core::Viewport;
use crate::error::TimelineResult;
use crate::render::{RenderCommand, Renderer};

/// Headless renderer that validates and counts commands.
#[derive(Debug)]
pub struct NullRenderer {
    pub surface: Viewport,
    pub command_count: usize,
    pub point_count: usize,
    pub label_count: usize,
}

impl NullRenderer {
    #[must_use]
    pub fn new(surface: Viewport) -> Self {
        Self {
            surface,
            command_count: 0,
            point_count: 0,
            label_count: 0,
        }
    }
}

impl Renderer for NullRenderer {
    fn surface_size(&self) -> Viewport {
        self.surface
    }

    fn render(&mut self, command: RenderCommand) -> TimelineResult<()> {
        command.validate()?;
        self.command_count += 1;
        match command {
            RenderCommand::Point(_) => self.point_count += 1,
            RenderCommand::ArtistLabel(_) => self.label_count += 1,
            _ => {}
        }
        Ok(())
    }
}
