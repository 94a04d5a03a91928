use std::time::Instant;

use tracing::trace;

use crate::error::TimelineResult;
use crate::interaction::{InputEvent, KeyCommand};
use crate::render::Renderer;

use super::TimelineEngine;

impl<R: Renderer> TimelineEngine<R> {
    /// Routes one host event to its handler.
    pub fn handle_input(&mut self, event: &InputEvent, now: Instant) -> TimelineResult<()> {
        match event {
            InputEvent::PointerMove { x, y } => {
                self.pointer_move(*x, *y)?;
            }
            InputEvent::Wheel { x, delta_y } => {
                self.wheel(*x, *delta_y)?;
            }
            InputEvent::LegendClick { genre, genre_group } => {
                self.legend_click(genre, genre_group)?;
            }
            InputEvent::KeyDown(key) => match KeyCommand::from_key_identifier(key) {
                Some(command) => {
                    self.key_down(command)?;
                }
                None => trace!(key = %key, "ignoring unmapped key"),
            },
            InputEvent::WindowResize => {
                self.window_resize(now);
            }
            InputEvent::Tick => {
                self.tick(now)?;
            }
        }
        Ok(())
    }
}
