pub mod geometry;
pub mod slider;

pub use geometry::{axis_angle, compute_radar_layout, RadarLayout};
pub use slider::{slider_percent_to_value, value_to_slider_percent};
