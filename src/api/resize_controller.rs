use std::time::Instant;

use tracing::debug;

use crate::error::TimelineResult;
use crate::interaction::TimerToken;
use crate::render::Renderer;

use super::TimelineEngine;

impl<R: Renderer> TimelineEngine<R> {
    /// Records a window resize; handling waits until resizes settle.
    ///
    /// Each call supersedes the pending one, so a burst of notifications ends
    /// in a single redraw.
    pub fn window_resize(&mut self, now: Instant) -> TimerToken {
        self.resize.notify(now)
    }

    /// Cancels a pending resize if `token` still owns it.
    pub fn cancel_resize(&mut self, token: TimerToken) -> bool {
        self.resize.cancel(token)
    }

    #[must_use]
    pub fn resize_pending(&self) -> bool {
        self.resize.is_pending()
    }

    /// Runs the settled resize once its deadline has passed.
    ///
    /// Returns `true` when a redraw happened.
    pub fn tick(&mut self, now: Instant) -> TimelineResult<bool> {
        if !self.resize.poll(now) {
            return Ok(false);
        }

        let viewport = self.renderer.surface_size();
        self.reset_state();
        self.draw()?;
        self.reset_ui()?;
        debug!(
            width = viewport.width,
            height = viewport.height,
            "resize handled"
        );
        Ok(true)
    }
}
