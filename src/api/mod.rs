mod draw_pass;
mod engine;
mod input_dispatch;
mod resize_controller;
mod selection_controller;
mod session;
mod timeline_config;
mod zoom_controller;

pub use engine::TimelineEngine;
pub use session::{SharedEngine, TimelineSession};
pub use timeline_config::{
    GenreGroupConfig, PlotConfig, PointConfig, TimeAxisConfig, TimelineConfig,
};
