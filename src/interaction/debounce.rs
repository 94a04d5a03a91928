use std::time::{Duration, Instant};

/// Token identifying one scheduled debounce deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerToken(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PendingTimer {
    token: TimerToken,
    deadline: Instant,
}

/// Collapses bursts of notifications into one firing after input settles.
///
/// Every `notify` supersedes the pending deadline. The host drives time
/// explicitly through `poll`, so the debouncer never spawns timers itself.
#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    next_token: u64,
    pending: Option<PendingTimer>,
}

impl Debouncer {
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            next_token: 0,
            pending: None,
        }
    }

    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedules a firing at `now + delay`, cancelling any pending one.
    pub fn notify(&mut self, now: Instant) -> TimerToken {
        let token = TimerToken(self.next_token);
        self.next_token = self.next_token.wrapping_add(1);
        self.pending = Some(PendingTimer {
            token,
            deadline: now + self.delay,
        });
        token
    }

    /// Cancels the pending firing if `token` still owns it.
    pub fn cancel(&mut self, token: TimerToken) -> bool {
        if self.pending.is_some_and(|pending| pending.token == token) {
            self.pending = None;
            return true;
        }
        false
    }

    pub fn cancel_all(&mut self) {
        self.pending = None;
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Returns `true` exactly once when the pending deadline has passed.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.pending {
            Some(pending) if now >= pending.deadline => {
                self.pending = None;
                true
            }
            _ => false,
        }
    }
}
