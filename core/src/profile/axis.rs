use serde::{Deserialize, Serialize};

use crate::prelude::ValueScale;

/// Palate dimension tracked by the taste profile.
///
/// Axis identity is first-class; display labels and colors derive from it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TasteAxis {
    Sweet,
    Salty,
    Sour,
    Bitter,
    Umami,
    Spicy,
    Crunchy,
    Creamy,
    Chewy,
    Hot,
    Cold,
}

/// The five basic tastes used by the compact chart.
pub const BASIC_FIVE: [TasteAxis; 5] = [
    TasteAxis::Sweet,
    TasteAxis::Salty,
    TasteAxis::Sour,
    TasteAxis::Bitter,
    TasteAxis::Umami,
];

/// All eleven tracked dimensions, in chart vertex order.
pub const FULL_PALATE: [TasteAxis; 11] = [
    TasteAxis::Sweet,
    TasteAxis::Salty,
    TasteAxis::Sour,
    TasteAxis::Bitter,
    TasteAxis::Umami,
    TasteAxis::Spicy,
    TasteAxis::Crunchy,
    TasteAxis::Creamy,
    TasteAxis::Chewy,
    TasteAxis::Hot,
    TasteAxis::Cold,
];

impl TasteAxis {
    pub fn label(&self) -> &'static str {
        match self {
            TasteAxis::Sweet => "Sweet",
            TasteAxis::Salty => "Salty",
            TasteAxis::Sour => "Sour",
            TasteAxis::Bitter => "Bitter",
            TasteAxis::Umami => "Umami",
            TasteAxis::Spicy => "Spicy",
            TasteAxis::Crunchy => "Crunchy",
            TasteAxis::Creamy => "Creamy",
            TasteAxis::Chewy => "Chewy",
            TasteAxis::Hot => "Hot",
            TasteAxis::Cold => "Cold",
        }
    }

    /// Presentation-only stroke/legend color; carries no semantic weight.
    pub fn default_color(&self) -> &'static str {
        match self {
            TasteAxis::Sweet => "#f472b6",
            TasteAxis::Salty => "#60a5fa",
            TasteAxis::Sour => "#facc15",
            TasteAxis::Bitter => "#4ade80",
            TasteAxis::Umami => "#c084fc",
            TasteAxis::Spicy => "#f87171",
            TasteAxis::Crunchy => "#fb923c",
            TasteAxis::Creamy => "#fcd34d",
            TasteAxis::Chewy => "#a78bfa",
            TasteAxis::Hot => "#ef4444",
            TasteAxis::Cold => "#38bdf8",
        }
    }
}

/// Which axis set a chart instance is built from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum AxisPreset {
    Basic,
    #[default]
    Full,
}

impl AxisPreset {
    pub fn axes(&self) -> &'static [TasteAxis] {
        match self {
            AxisPreset::Basic => &BASIC_FIVE,
            AxisPreset::Full => &FULL_PALATE,
        }
    }

    /// Default value domain for charts built from this preset.
    pub fn default_scale(&self) -> ValueScale {
        match self {
            AxisPreset::Basic => ValueScale::new(0.0, 5.0),
            AxisPreset::Full => ValueScale::new(0.0, 10.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_expose_their_axis_sets() {
        assert_eq!(AxisPreset::Basic.axes().len(), 5);
        assert_eq!(AxisPreset::Full.axes().len(), 11);
        assert_eq!(AxisPreset::Basic.axes()[4], TasteAxis::Umami);
    }

    #[test]
    fn preset_scales_match_chart_variants() {
        assert_eq!(AxisPreset::Basic.default_scale().max, 5.0);
        assert_eq!(AxisPreset::Full.default_scale().max, 10.0);
    }

    #[test]
    fn axis_serializes_by_name() {
        let json = serde_json::to_string(&TasteAxis::Umami).unwrap();
        assert_eq!(json, "\"Umami\"");
        let back: TasteAxis = serde_json::from_str(&json).unwrap();
        assert_eq!(back, TasteAxis::Umami);
    }
}
