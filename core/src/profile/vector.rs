use serde::{Deserialize, Serialize};

use crate::profile::axis::{AxisPreset, TasteAxis};

/// One axis of a taste vector: its magnitude plus an optional color override.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AxisSample {
    pub axis: TasteAxis,
    pub value: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl AxisSample {
    pub fn new(axis: TasteAxis, value: f32) -> Self {
        Self {
            axis,
            value,
            color: None,
        }
    }

    /// Stroke/fill color for this axis; overrides fall back to the axis default.
    pub fn effective_color(&self) -> &str {
        self.color.as_deref().unwrap_or_else(|| self.axis.default_color())
    }
}

/// Ordered set of axis samples; the order fixes polygon vertex order and
/// must match between data and label rendering.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TasteVector {
    samples: Vec<AxisSample>,
}

impl TasteVector {
    pub fn new(samples: Vec<AxisSample>) -> Self {
        Self { samples }
    }

    /// Zips a preset's axes with `values`; missing values default to zero.
    pub fn from_preset(preset: AxisPreset, values: &[f32]) -> Self {
        let samples = preset
            .axes()
            .iter()
            .enumerate()
            .map(|(index, &axis)| AxisSample::new(axis, values.get(index).copied().unwrap_or(0.0)))
            .collect();
        Self { samples }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn samples(&self) -> &[AxisSample] {
        &self.samples
    }

    pub fn values(&self) -> Vec<f32> {
        self.samples.iter().map(|sample| sample.value).collect()
    }

    pub fn labels(&self) -> Vec<String> {
        self.samples
            .iter()
            .map(|sample| sample.axis.label().to_string())
            .collect()
    }

    pub fn colors(&self) -> Vec<String> {
        self.samples
            .iter()
            .map(|sample| sample.effective_color().to_string())
            .collect()
    }

    pub fn get(&self, axis: TasteAxis) -> Option<f32> {
        self.samples
            .iter()
            .find(|sample| sample.axis == axis)
            .map(|sample| sample.value)
    }

    /// Updates the sample for `axis`; returns false when the axis is not
    /// part of this vector.
    pub fn set(&mut self, axis: TasteAxis, value: f32) -> bool {
        match self.samples.iter_mut().find(|sample| sample.axis == axis) {
            Some(sample) => {
                sample.value = value;
                true
            }
            None => false,
        }
    }
}
