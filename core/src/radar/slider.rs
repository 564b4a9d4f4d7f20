use crate::prelude::{ChartError, ChartResult, ValueScale};

/// Fill percentage (0-100) of a linear slider showing `value` on `scale`.
///
/// Multiplies before dividing so scale endpoints and simple fractions stay
/// exact in f32.
pub fn value_to_slider_percent(value: f32, scale: ValueScale) -> ChartResult<f32> {
    ensure_scale(scale)?;
    let clamped = value.clamp(scale.min, scale.max);
    Ok((clamped - scale.min) * 100.0 / scale.span())
}

/// Inverse of [`value_to_slider_percent`]: converts a slider position back
/// into an axis value.
pub fn slider_percent_to_value(percent: f32, scale: ValueScale) -> ChartResult<f32> {
    ensure_scale(scale)?;
    let clamped = percent.clamp(0.0, 100.0);
    Ok(scale.min + clamped * scale.span() / 100.0)
}

fn ensure_scale(scale: ValueScale) -> ChartResult<()> {
    if scale.max <= scale.min {
        return Err(ChartError::InvalidScale {
            min: scale.min,
            max: scale.max,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    #[test]
    fn seven_of_ten_fills_seventy_percent() {
        let scale = ValueScale::new(0.0, 10.0);
        assert_eq!(value_to_slider_percent(7.0, scale).unwrap(), 70.0);
        assert_eq!(slider_percent_to_value(70.0, scale).unwrap(), 7.0);
    }

    #[test]
    fn mapping_round_trips_across_the_scale() {
        let scale = ValueScale::new(1.0, 5.0);
        for step in 0..=40 {
            let value = scale.min + step as f32 * scale.span() / 40.0;
            let percent = value_to_slider_percent(value, scale).unwrap();
            let back = slider_percent_to_value(percent, scale).unwrap();
            assert!((back - value).abs() < EPS, "value {} came back as {}", value, back);
        }
    }

    #[test]
    fn endpoints_map_exactly() {
        let scale = ValueScale::new(0.0, 5.0);
        assert_eq!(value_to_slider_percent(0.0, scale).unwrap(), 0.0);
        assert_eq!(value_to_slider_percent(5.0, scale).unwrap(), 100.0);
        assert_eq!(slider_percent_to_value(0.0, scale).unwrap(), 0.0);
        assert_eq!(slider_percent_to_value(100.0, scale).unwrap(), 5.0);
    }

    #[test]
    fn out_of_range_inputs_are_clamped() {
        let scale = ValueScale::new(0.0, 10.0);
        assert_eq!(value_to_slider_percent(-100.0, scale).unwrap(), 0.0);
        assert_eq!(value_to_slider_percent(110.0, scale).unwrap(), 100.0);
        assert_eq!(slider_percent_to_value(-5.0, scale).unwrap(), 0.0);
        assert_eq!(slider_percent_to_value(140.0, scale).unwrap(), 10.0);
    }

    #[test]
    fn degenerate_scale_is_rejected() {
        let scale = ValueScale::new(5.0, 5.0);
        assert!(matches!(
            value_to_slider_percent(1.0, scale),
            Err(ChartError::InvalidScale { .. })
        ));
        assert!(matches!(
            slider_percent_to_value(50.0, scale),
            Err(ChartError::InvalidScale { .. })
        ));
    }
}
