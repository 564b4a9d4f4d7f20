use serde::{Deserialize, Serialize};

/// A 2D point in screen coordinates (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: Point) -> f32 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

/// The value domain an axis value is expressed in.
///
/// The compact chart runs 0-5 and the full-palate chart 0-10, so the scale
/// is always supplied explicitly rather than inferred.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueScale {
    pub min: f32,
    pub max: f32,
}

impl ValueScale {
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    pub fn span(&self) -> f32 {
        self.max - self.min
    }

    /// Clamps `value` into the scale and maps it onto `[0, 1]`.
    pub fn normalized(&self, value: f32) -> f32 {
        let clamped = value.clamp(self.min, self.max);
        (clamped - self.min) / self.span()
    }
}

/// Placement parameters for a rendered chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartFrame {
    pub center: Point,
    pub radius: f32,
    /// Distance past the outer boundary at which axis labels sit.
    pub label_offset: f32,
}

impl ChartFrame {
    pub fn new(center: Point, radius: f32, label_offset: f32) -> Self {
        Self {
            center,
            radius,
            label_offset,
        }
    }
}

/// Common error type for chart layout computation.
#[derive(thiserror::Error, Debug)]
pub enum ChartError {
    #[error("invalid axis count: {0} (a radar chart needs at least 3 axes)")]
    InvalidAxisCount(usize),
    #[error("invalid radius: {0}")]
    InvalidRadius(f32),
    #[error("invalid scale: min {min} is not below max {max}")]
    InvalidScale { min: f32, max: f32 },
}

pub type ChartResult<T> = Result<T, ChartError>;

/// Errors raised by the review journal and friend-link flows.
#[derive(thiserror::Error, Debug)]
pub enum JournalError {
    #[error("incomplete draft: {0}")]
    IncompleteDraft(String),
    #[error("unknown link token")]
    UnknownToken,
    #[error("expired link token")]
    ExpiredToken,
}

pub type JournalResult<T> = Result<T, JournalError>;
