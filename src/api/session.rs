use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, warn};

use crate::dataset::Dataset;
use crate::error::{TimelineError, TimelineResult};
use crate::interaction::{InputEvent, InputHub, Subscription};
use crate::render::Renderer;

use super::{TimelineConfig, TimelineEngine};

/// Engine shared between the session and its input listener.
pub type SharedEngine<R> = Rc<RefCell<TimelineEngine<R>>>;

struct ActiveTimeline<R: Renderer> {
    period: String,
    engine: SharedEngine<R>,
    subscription: Subscription,
}

/// Owns the per-period dataset cache and the one interactive timeline.
///
/// Activating a period cancels the previous timeline's input subscription
/// before the new timeline subscribes, so at most one engine ever reacts to
/// host input.
pub struct TimelineSession<R: Renderer + 'static> {
    config: TimelineConfig,
    hub: InputHub,
    datasets: HashMap<String, Arc<Dataset>>,
    current: Option<ActiveTimeline<R>>,
}

impl<R: Renderer + 'static> TimelineSession<R> {
    pub fn new(config: TimelineConfig) -> TimelineResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            hub: InputHub::new(),
            datasets: HashMap::new(),
            current: None,
        })
    }

    #[must_use]
    pub fn config(&self) -> &TimelineConfig {
        &self.config
    }

    #[must_use]
    pub fn hub(&self) -> &InputHub {
        &self.hub
    }

    /// Returns the cached dataset for `period`, building it with `load` on
    /// first use. A failed load is not cached.
    pub fn dataset_or_load(
        &mut self,
        period: &str,
        load: impl FnOnce(&TimelineConfig) -> TimelineResult<Dataset>,
    ) -> TimelineResult<Arc<Dataset>> {
        if let Some(dataset) = self.datasets.get(period) {
            return Ok(Arc::clone(dataset));
        }

        let dataset = Arc::new(load(&self.config)?);
        debug!(period, scrobble_count = dataset.scrobbles().len(), "dataset cached");
        self.datasets.insert(period.to_owned(), Arc::clone(&dataset));
        Ok(dataset)
    }

    #[must_use]
    pub fn is_cached(&self, period: &str) -> bool {
        self.datasets.contains_key(period)
    }

    /// Replaces the active timeline with a new one for a cached period.
    pub fn activate(&mut self, period: &str, renderer: R) -> TimelineResult<SharedEngine<R>> {
        let dataset = self.datasets.get(period).cloned().ok_or_else(|| {
            TimelineError::InvalidData(format!("no dataset cached for period `{period}`"))
        })?;
        let engine = TimelineEngine::new(renderer, dataset, self.config.clone())?;

        if let Some(previous) = self.current.take() {
            let cancelled = previous.subscription.cancel();
            debug!(period = %previous.period, cancelled, "previous timeline detached");
        }

        let engine = Rc::new(RefCell::new(engine));
        engine.borrow_mut().render_initial()?;

        if self.config.debug {
            log_missing_genre_artists(engine.borrow().dataset());
        }

        let listener_engine = Rc::downgrade(&engine);
        let subscription = self.hub.subscribe(move |event, now| {
            let Some(engine) = listener_engine.upgrade() else {
                return;
            };
            let Ok(mut engine) = engine.try_borrow_mut() else {
                warn!(?event, "timeline busy, dropping input event");
                return;
            };
            if let Err(err) = engine.handle_input(event, now) {
                warn!(error = %err, ?event, "input handling failed");
            }
        });

        debug!(period, subscription = subscription.id(), "timeline activated");
        self.current = Some(ActiveTimeline {
            period: period.to_owned(),
            engine: Rc::clone(&engine),
            subscription,
        });
        Ok(engine)
    }

    /// Detaches the active timeline from input, if any.
    pub fn deactivate(&mut self) -> bool {
        match self.current.take() {
            Some(active) => active.subscription.cancel(),
            None => false,
        }
    }

    #[must_use]
    pub fn current(&self) -> Option<SharedEngine<R>> {
        self.current
            .as_ref()
            .map(|active| Rc::clone(&active.engine))
    }

    #[must_use]
    pub fn current_period(&self) -> Option<&str> {
        self.current.as_ref().map(|active| active.period.as_str())
    }

    /// Forwards one host event to every subscribed listener.
    pub fn dispatch(&self, event: &InputEvent, now: Instant) -> usize {
        self.hub.dispatch(event, now)
    }

    /// Drives debounced work; call from the host's timer or frame loop.
    pub fn tick(&self, now: Instant) -> usize {
        self.hub.dispatch(&InputEvent::Tick, now)
    }
}

fn log_missing_genre_artists(dataset: &Dataset) {
    for (artist, scrobble_count) in dataset.missing_genre_artists() {
        debug!(artist = %artist, scrobble_count, "artist has no genre mapping");
    }
}
