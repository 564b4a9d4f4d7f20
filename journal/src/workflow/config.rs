use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tastecore::prelude::{ChartFrame, Point, ValueScale};
use tastecore::profile::AxisPreset;

/// Chart and scale settings for one workflow run.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileConfig {
    pub preset: AxisPreset,
    pub scale_min: f32,
    pub scale_max: f32,
    pub center_x: f32,
    pub center_y: f32,
    pub radius: f32,
    pub label_offset: f32,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self::for_preset(AxisPreset::Full)
    }
}

impl ProfileConfig {
    /// Preset defaults: the compact chart runs 0-5, the full palate 0-10.
    pub fn for_preset(preset: AxisPreset) -> Self {
        let scale = preset.default_scale();
        Self {
            preset,
            scale_min: scale.min,
            scale_max: scale.max,
            center_x: 160.0,
            center_y: 160.0,
            radius: 120.0,
            label_offset: 18.0,
        }
    }

    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading profile config {}", path_ref.display()))?;
        let config: ProfileConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing profile config {}", path_ref.display()))?;
        Ok(config)
    }

    pub fn value_scale(&self) -> ValueScale {
        ValueScale::new(self.scale_min, self.scale_max)
    }

    pub fn chart_frame(&self) -> ChartFrame {
        ChartFrame::new(
            Point::new(self.center_x, self.center_y),
            self.radius,
            self.label_offset,
        )
    }
}
