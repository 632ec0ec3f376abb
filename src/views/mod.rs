// src/views/mod.rs

pub mod globe;
pub mod layout;
pub mod palette;
pub mod slider;
pub mod stats;

pub use globe::GlobeView;
pub use layout::{globe_scale, Layout};
pub use slider::SliderWidget;
pub use stats::StatsPanel;
