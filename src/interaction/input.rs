use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Instant;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::trace;

use super::KeyCommand;

/// Input delivered by the host, already stripped of DOM/toolkit details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    PointerMove { x: f64, y: f64 },
    Wheel { x: f64, delta_y: f64 },
    LegendClick { genre: String, genre_group: String },
    /// Raw key identifier; unknown keys are ignored by the timeline.
    KeyDown(String),
    WindowResize,
    /// Lets pending debounced work fire once its deadline passed.
    Tick,
}

impl InputEvent {
    #[must_use]
    pub fn key(command: KeyCommand) -> Self {
        let identifier = match command {
            KeyCommand::Escape => "Escape",
            KeyCommand::ArrowUp => "ArrowUp",
            KeyCommand::ArrowDown => "ArrowDown",
            KeyCommand::ArrowLeft => "ArrowLeft",
            KeyCommand::ArrowRight => "ArrowRight",
        };
        Self::KeyDown(identifier.to_owned())
    }
}

type Listener = Box<dyn FnMut(&InputEvent, Instant)>;

#[derive(Default)]
struct ListenerTable {
    next_id: u64,
    // `None` while the listener is running.
    listeners: IndexMap<u64, Option<Listener>>,
}

/// Plain callback registrations fed by the host's event loop.
///
/// Listeners run in registration order. A listener may cancel any
/// subscription, including its own, while an event is being dispatched.
#[derive(Clone, Default)]
pub struct InputHub {
    table: Rc<RefCell<ListenerTable>>,
}

impl std::fmt::Debug for InputHub {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InputHub")
            .field("listener_count", &self.listener_count())
            .finish()
    }
}

impl InputHub {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, listener: impl FnMut(&InputEvent, Instant) + 'static) -> Subscription {
        let mut table = self.table.borrow_mut();
        let id = table.next_id;
        table.next_id += 1;
        table.listeners.insert(id, Some(Box::new(listener)));
        trace!(subscription = id, "input listener subscribed");
        Subscription {
            id,
            table: Rc::downgrade(&self.table),
        }
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.table.borrow().listeners.len()
    }

    /// Delivers `event` to every listener; returns how many were called.
    pub fn dispatch(&self, event: &InputEvent, now: Instant) -> usize {
        let ids: Vec<u64> = self.table.borrow().listeners.keys().copied().collect();
        let mut called = 0;

        for id in ids {
            let listener = self
                .table
                .borrow_mut()
                .listeners
                .get_mut(&id)
                .and_then(Option::take);
            let Some(mut listener) = listener else {
                continue;
            };

            listener(event, now);
            called += 1;

            if let Some(slot) = self.table.borrow_mut().listeners.get_mut(&id) {
                *slot = Some(listener);
            }
        }

        called
    }
}

/// Handle for one listener registration.
///
/// Dropping the handle keeps the listener registered; call
/// [`Subscription::cancel`] to remove it.
#[derive(Debug)]
pub struct Subscription {
    id: u64,
    table: Weak<RefCell<ListenerTable>>,
}

impl Subscription {
    #[must_use]
    pub fn id(&self) -> u64 {
        self.id
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.table
            .upgrade()
            .is_some_and(|table| table.borrow().listeners.contains_key(&self.id))
    }

    /// Removes the listener. Returns `false` if it was already gone.
    pub fn cancel(self) -> bool {
        let Some(table) = self.table.upgrade() else {
            return false;
        };
        let removed = table.borrow_mut().listeners.shift_remove(&self.id).is_some();
        trace!(subscription = self.id, removed, "input listener cancelled");
        removed
    }
}
