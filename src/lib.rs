//! scrobble-timeline: indexing and interaction engine for scrobble timelines.
//!
//! Plots every scrobble of a listening history as a point (x = time,
//! y = artist playcount rank), and keeps the indexes needed for hit-testing,
//! genre/artist highlighting, wheel zoom and keyboard navigation. Drawing is
//! delegated to a [`render::Renderer`].

pub mod api;
pub mod core;
pub mod dataset;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{TimelineConfig, TimelineEngine, TimelineSession};
pub use error::{TimelineError, TimelineResult};
