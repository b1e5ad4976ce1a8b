//! Numeric helpers shared by the membership and inference stages.

/// Number of decimal places kept for degrees, strengths and scores.
pub const PRECISION: i32 = 2;

/// Round to [`PRECISION`] decimal places, half away from zero.
pub fn round2(value: f64) -> f64 {
    let factor = 10f64.powi(PRECISION);
    (value * factor).round() / factor
}

/// Clamp a value into `[0, 1]`. NaN maps to `0`.
pub fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_two_places() {
        assert_eq!(round2(0.158_489), 0.16);
        assert_eq!(round2(0.564_9), 0.56);
        assert_eq!(round2(1.0), 1.0);
        assert_eq!(round2(0.0), 0.0);
    }

    #[test]
    fn rounding_absorbs_float_noise() {
        assert_eq!(round2(1.0 - 0.56), 0.44);
        assert_eq!(round2(0.1 + 0.2), 0.3);
    }

    #[test]
    fn clamps_into_unit_interval() {
        assert_eq!(clamp_unit(-0.3), 0.0);
        assert_eq!(clamp_unit(0.42), 0.42);
        assert_eq!(clamp_unit(7.0), 1.0);
        assert_eq!(clamp_unit(f64::INFINITY), 1.0);
        assert_eq!(clamp_unit(f64::NEG_INFINITY), 0.0);
        assert_eq!(clamp_unit(f64::NAN), 0.0);
    }
}
