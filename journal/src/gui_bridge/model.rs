use serde::{Deserialize, Serialize};
use tastecore::prelude::{Point, ValueScale};
use tastecore::profile::AxisPreset;

use crate::workflow::runner::WorkflowResult;

/// Wire model of a laid-out chart, consumed by the visualizer.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ChartModel {
    pub preset: AxisPreset,
    pub axis_labels: Vec<String>,
    pub axis_colors: Vec<String>,
    pub anchor_points: Vec<Point>,
    pub data_points: Vec<Point>,
    pub label_points: Vec<Point>,
    pub values: Vec<f32>,
    pub slider_percents: Vec<f32>,
    pub scale_min: f32,
    pub scale_max: f32,
    pub notes: Vec<String>,
}

impl ChartModel {
    pub fn from_result(result: &WorkflowResult, preset: AxisPreset, scale: ValueScale) -> Self {
        Self {
            preset,
            axis_labels: result.labels.clone(),
            axis_colors: result.colors.clone(),
            anchor_points: result.layout.axis_anchor_points.clone(),
            data_points: result.layout.data_points.clone(),
            label_points: result.layout.label_points.clone(),
            values: result.values.clone(),
            slider_percents: result.slider_percents.clone(),
            scale_min: scale.min,
            scale_max: scale.max,
            notes: result.notes.clone(),
        }
    }
}
