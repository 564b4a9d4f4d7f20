pub mod axis;
pub mod vector;

pub use axis::{AxisPreset, TasteAxis, BASIC_FIVE, FULL_PALATE};
pub use vector::{AxisSample, TasteVector};
