mod support;

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Instant;

use scrobble_timeline::TimelineError;
use scrobble_timeline::api::{TimelineConfig, TimelineSession};
use scrobble_timeline::dataset::Dataset;
use scrobble_timeline::interaction::{InputEvent, InputHub, Subscription};
use scrobble_timeline::render::RecordingRenderer;

use support::{SURFACE, fixture_genres, fixture_raw};

fn load_fixture(config: &TimelineConfig) -> scrobble_timeline::TimelineResult<Dataset> {
    Dataset::from_raw(fixture_raw(), &fixture_genres(), config)
}

#[test]
fn hub_calls_listeners_in_registration_order() {
    let hub = InputHub::new();
    let calls = Rc::new(RefCell::new(Vec::new()));

    let first_calls = Rc::clone(&calls);
    let _first = hub.subscribe(move |_, _| first_calls.borrow_mut().push("first"));
    let second_calls = Rc::clone(&calls);
    let _second = hub.subscribe(move |_, _| second_calls.borrow_mut().push("second"));

    assert_eq!(hub.dispatch(&InputEvent::WindowResize, Instant::now()), 2);
    assert_eq!(*calls.borrow(), vec!["first", "second"]);
}

#[test]
fn cancelled_subscription_stops_receiving_events() {
    let hub = InputHub::new();
    let count = Rc::new(Cell::new(0));
    let listener_count = Rc::clone(&count);
    let subscription = hub.subscribe(move |_, _| listener_count.set(listener_count.get() + 1));

    hub.dispatch(&InputEvent::Tick, Instant::now());
    assert!(subscription.is_active());
    assert!(subscription.cancel());
    hub.dispatch(&InputEvent::Tick, Instant::now());

    assert_eq!(count.get(), 1);
    assert_eq!(hub.listener_count(), 0);
}

#[test]
fn listener_may_cancel_its_own_subscription_during_dispatch() {
    let hub = InputHub::new();
    let slot: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));
    let count = Rc::new(Cell::new(0));

    let listener_slot = Rc::clone(&slot);
    let listener_count = Rc::clone(&count);
    let subscription = hub.subscribe(move |_, _| {
        listener_count.set(listener_count.get() + 1);
        if let Some(own) = listener_slot.borrow_mut().take() {
            assert!(own.cancel());
        }
    });
    *slot.borrow_mut() = Some(subscription);

    assert_eq!(hub.dispatch(&InputEvent::Tick, Instant::now()), 1);
    assert_eq!(hub.dispatch(&InputEvent::Tick, Instant::now()), 0);
    assert_eq!(count.get(), 1);
}

#[test]
fn session_caches_datasets_per_period() {
    let mut session =
        TimelineSession::<RecordingRenderer>::new(TimelineConfig::default()).expect("session");
    let loads = Cell::new(0);

    let first = session
        .dataset_or_load("2024", |config| {
            loads.set(loads.get() + 1);
            load_fixture(config)
        })
        .expect("first load");
    let second = session
        .dataset_or_load("2024", |config| {
            loads.set(loads.get() + 1);
            load_fixture(config)
        })
        .expect("cached load");

    assert_eq!(loads.get(), 1);
    assert!(std::sync::Arc::ptr_eq(&first, &second));
    assert!(session.is_cached("2024"));
    assert!(!session.is_cached("2023"));
}

#[test]
fn failed_load_is_not_cached() {
    let mut session =
        TimelineSession::<RecordingRenderer>::new(TimelineConfig::default()).expect("session");
    let result = session.dataset_or_load("empty", |config| Dataset::from_raw(Vec::new(), &fixture_genres(), config));

    assert!(matches!(result, Err(TimelineError::EmptyCollection)));
    assert!(!session.is_cached("empty"));
}

#[test]
fn activating_uncached_period_fails() {
    let mut session =
        TimelineSession::<RecordingRenderer>::new(TimelineConfig::default()).expect("session");
    let result = session.activate("2024", RecordingRenderer::new(SURFACE));
    assert!(matches!(result, Err(TimelineError::InvalidData(_))));
    assert_eq!(session.hub().listener_count(), 0);
}

#[test]
fn activation_replaces_previous_timeline_subscription() {
    let config = TimelineConfig {
        debug: true,
        ..TimelineConfig::default()
    };
    let mut session = TimelineSession::new(config).expect("session");
    session
        .dataset_or_load("2024", load_fixture)
        .expect("dataset");

    let previous = session
        .activate("2024", RecordingRenderer::new(SURFACE))
        .expect("first activation");
    assert_eq!(session.hub().listener_count(), 1);

    let current = session
        .activate("2024", RecordingRenderer::new(SURFACE))
        .expect("second activation");
    assert_eq!(session.hub().listener_count(), 1);
    assert_eq!(session.current_period(), Some("2024"));

    let point = current
        .borrow()
        .artist_registry()
        .get_point_list("Foo Fighters")
        .and_then(|points| points.first())
        .cloned()
        .expect("foo fighters point");
    previous.borrow_mut().renderer_mut().take_commands();

    let delivered = session.dispatch(
        &InputEvent::PointerMove {
            x: point.x,
            y: point.y,
        },
        Instant::now(),
    );

    assert_eq!(delivered, 1);
    assert_eq!(
        current.borrow().selection().selected_artist(),
        Some("Foo Fighters")
    );
    assert!(previous.borrow().selection().is_idle());
    assert!(previous.borrow().renderer().commands().is_empty());
}

#[test]
fn busy_engine_drops_event_instead_of_panicking() {
    let mut session = TimelineSession::new(TimelineConfig::default()).expect("session");
    session
        .dataset_or_load("2024", load_fixture)
        .expect("dataset");
    let engine = session
        .activate("2024", RecordingRenderer::new(SURFACE))
        .expect("activation");

    let guard = engine.borrow();
    assert_eq!(session.tick(Instant::now()), 1);
    drop(guard);
}

#[test]
fn deactivate_detaches_current_timeline() {
    let mut session = TimelineSession::new(TimelineConfig::default()).expect("session");
    session
        .dataset_or_load("2024", load_fixture)
        .expect("dataset");
    session
        .activate("2024", RecordingRenderer::new(SURFACE))
        .expect("activation");

    assert!(session.deactivate());
    assert!(session.current().is_none());
    assert_eq!(session.hub().listener_count(), 0);
    assert!(!session.deactivate());
}
