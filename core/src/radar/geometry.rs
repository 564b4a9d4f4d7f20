use std::f32::consts::PI;

use serde::{Deserialize, Serialize};

use crate::prelude::{ChartError, ChartFrame, ChartResult, Point, ValueScale};
use crate::profile::TasteVector;

/// Fewer than three axes cannot enclose an area.
const MIN_AXES: usize = 3;

/// A laid-out radar chart: one entry per axis, in vector order.
///
/// The data polygon is `data_points` in order, closed last-to-first by the
/// renderer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RadarLayout {
    /// Fixed outer-boundary point of each axis, independent of data values.
    pub axis_anchor_points: Vec<Point>,
    /// Per-axis point at `radius * normalized(value)` along the spoke.
    pub data_points: Vec<Point>,
    /// Per-axis point at `radius + label_offset`, for placing axis names.
    pub label_points: Vec<Point>,
}

/// Angle of axis `index` out of `count`, in radians.
///
/// Axis 0 points straight up; successive axes advance clockwise in screen
/// coordinates so vertex order matches reading order around the chart.
pub fn axis_angle(index: usize, count: usize) -> f32 {
    index as f32 * (2.0 * PI / count as f32) - PI / 2.0
}

fn polar_point(center: Point, angle: f32, distance: f32) -> Point {
    Point::new(
        center.x + angle.cos() * distance,
        center.y + angle.sin() * distance,
    )
}

/// Maps a taste vector onto renderable chart coordinates.
///
/// Out-of-range axis values are clamped into the scale rather than
/// rejected, so a data point can never leave `[0, radius]`. Malformed
/// configuration (axis count, radius, scale bounds) fails fast instead.
pub fn compute_radar_layout(
    vector: &TasteVector,
    frame: ChartFrame,
    scale: ValueScale,
) -> ChartResult<RadarLayout> {
    let count = vector.len();
    if count < MIN_AXES {
        return Err(ChartError::InvalidAxisCount(count));
    }
    if frame.radius <= 0.0 {
        return Err(ChartError::InvalidRadius(frame.radius));
    }
    if scale.max <= scale.min {
        return Err(ChartError::InvalidScale {
            min: scale.min,
            max: scale.max,
        });
    }

    let mut axis_anchor_points = Vec::with_capacity(count);
    let mut data_points = Vec::with_capacity(count);
    let mut label_points = Vec::with_capacity(count);

    for (index, sample) in vector.samples().iter().enumerate() {
        let angle = axis_angle(index, count);
        axis_anchor_points.push(polar_point(frame.center, angle, frame.radius));
        data_points.push(polar_point(
            frame.center,
            angle,
            frame.radius * scale.normalized(sample.value),
        ));
        label_points.push(polar_point(
            frame.center,
            angle,
            frame.radius + frame.label_offset,
        ));
    }

    Ok(RadarLayout {
        axis_anchor_points,
        data_points,
        label_points,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{AxisPreset, AxisSample, TasteAxis};

    const EPS: f32 = 1e-3;

    fn frame() -> ChartFrame {
        ChartFrame::new(Point::new(100.0, 100.0), 70.0, 16.0)
    }

    fn angle_from_center(center: Point, point: Point) -> f32 {
        (point.y - center.y).atan2(point.x - center.x)
    }

    #[test]
    fn anchors_sit_on_the_outer_radius() {
        let vector = TasteVector::from_preset(AxisPreset::Full, &[]);
        let layout = compute_radar_layout(&vector, frame(), ValueScale::new(0.0, 10.0)).unwrap();

        assert_eq!(layout.axis_anchor_points.len(), 11);
        for anchor in &layout.axis_anchor_points {
            assert!((anchor.distance(frame().center) - 70.0).abs() < EPS);
        }
    }

    #[test]
    fn anchor_zero_points_straight_up() {
        let vector = TasteVector::from_preset(AxisPreset::Basic, &[]);
        let layout = compute_radar_layout(&vector, frame(), ValueScale::new(0.0, 5.0)).unwrap();

        let top = layout.axis_anchor_points[0];
        assert!((top.x - 100.0).abs() < EPS);
        assert!((top.y - 30.0).abs() < EPS);
    }

    #[test]
    fn anchors_are_evenly_spaced() {
        let vector = TasteVector::from_preset(AxisPreset::Basic, &[]);
        let layout = compute_radar_layout(&vector, frame(), ValueScale::new(0.0, 5.0)).unwrap();

        let expected = 2.0 * PI / 5.0;
        for window in layout.axis_anchor_points.windows(2) {
            let mut spacing = angle_from_center(frame().center, window[1])
                - angle_from_center(frame().center, window[0]);
            if spacing < 0.0 {
                spacing += 2.0 * PI;
            }
            assert!((spacing - expected).abs() < EPS);
        }
    }

    #[test]
    fn boundary_values_hit_center_and_rim() {
        let vector = TasteVector::from_preset(AxisPreset::Basic, &[0.0, 5.0, 2.5, 0.0, 5.0]);
        let layout = compute_radar_layout(&vector, frame(), ValueScale::new(0.0, 5.0)).unwrap();

        // value == min collapses exactly onto the center, no drift
        assert_eq!(layout.data_points[0], Point::new(100.0, 100.0));
        // value == max coincides with the anchor
        assert_eq!(layout.data_points[1], layout.axis_anchor_points[1]);
        assert!((layout.data_points[1].distance(frame().center) - 70.0).abs() < EPS);
    }

    #[test]
    fn salty_axis_lands_at_minus_eighteen_degrees() {
        let vector = TasteVector::from_preset(AxisPreset::Basic, &[0.0, 5.0, 2.5, 0.0, 5.0]);
        let layout = compute_radar_layout(&vector, frame(), ValueScale::new(0.0, 5.0)).unwrap();

        let salty = layout.data_points[1];
        let angle = angle_from_center(frame().center, salty);
        assert!((angle - (-18.0f32.to_radians())).abs() < EPS);
        assert!((salty.distance(frame().center) - 70.0).abs() < EPS);
    }

    #[test]
    fn out_of_range_values_are_clamped_into_the_frame() {
        let vector = TasteVector::from_preset(AxisPreset::Basic, &[-100.0, 105.0, 2.0, 2.0, 2.0]);
        let layout = compute_radar_layout(&vector, frame(), ValueScale::new(0.0, 5.0)).unwrap();

        for point in &layout.data_points {
            assert!(point.x.is_finite() && point.y.is_finite());
            let distance = point.distance(frame().center);
            assert!((0.0..=70.0 + EPS).contains(&distance));
        }
        assert_eq!(layout.data_points[0], Point::new(100.0, 100.0));
        assert_eq!(layout.data_points[1], layout.axis_anchor_points[1]);
    }

    #[test]
    fn label_points_sit_past_the_rim() {
        let vector = TasteVector::from_preset(AxisPreset::Full, &[]);
        let layout = compute_radar_layout(&vector, frame(), ValueScale::new(0.0, 10.0)).unwrap();

        for label in &layout.label_points {
            assert!((label.distance(frame().center) - 86.0).abs() < EPS);
        }
    }

    #[test]
    fn identical_inputs_yield_identical_layouts() {
        let vector = TasteVector::from_preset(AxisPreset::Full, &[3.0, 7.5, 1.0]);
        let scale = ValueScale::new(0.0, 10.0);
        let first = compute_radar_layout(&vector, frame(), scale).unwrap();
        let second = compute_radar_layout(&vector, frame(), scale).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn too_few_axes_are_rejected() {
        let vector = TasteVector::new(vec![
            AxisSample::new(TasteAxis::Sweet, 1.0),
            AxisSample::new(TasteAxis::Salty, 2.0),
        ]);
        let err = compute_radar_layout(&vector, frame(), ValueScale::new(0.0, 5.0)).unwrap_err();
        assert!(matches!(err, ChartError::InvalidAxisCount(2)));
    }

    #[test]
    fn non_positive_radius_is_rejected() {
        let vector = TasteVector::from_preset(AxisPreset::Basic, &[]);
        let bad = ChartFrame::new(Point::new(100.0, 100.0), 0.0, 16.0);
        let err = compute_radar_layout(&vector, bad, ValueScale::new(0.0, 5.0)).unwrap_err();
        assert!(matches!(err, ChartError::InvalidRadius(_)));
    }

    #[test]
    fn degenerate_scale_is_rejected() {
        let vector = TasteVector::from_preset(AxisPreset::Basic, &[]);
        let err = compute_radar_layout(&vector, frame(), ValueScale::new(5.0, 5.0)).unwrap_err();
        assert!(matches!(err, ChartError::InvalidScale { .. }));
    }
}
