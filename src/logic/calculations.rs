/// Round to one decimal place, half away from zero
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Round to two decimal places
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Express a score multiplier as a whole percentage
pub fn to_percent(score: f64) -> u32 {
    (score * 100.0).round().max(0.0) as u32
}

/// Linear position of `value` inside `[min, max]`, 0.0 at `min` and 1.0 at `max`
pub fn band_fraction(value: f64, min: f64, max: f64) -> f64 {
    (value - min) / (max - min)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounding_known_values() {
        assert_eq!(round1(48.26), 48.3);
        assert_eq!(round1(48.24), 48.2);
        assert_eq!(round1(48.25), 48.3);
        assert_eq!(round2(3.14159), 3.14);
    }

    #[test]
    fn percent_conversion() {
        assert_eq!(to_percent(1.0), 100);
        assert_eq!(to_percent(0.706), 71);
        assert_eq!(to_percent(0.704), 70);
        assert_eq!(to_percent(1.3), 130);
    }

    #[test]
    fn band_fraction_endpoints() {
        assert_eq!(band_fraction(800.0, 800.0, 1400.0), 0.0);
        assert_eq!(band_fraction(1400.0, 800.0, 1400.0), 1.0);
        assert_eq!(band_fraction(1100.0, 800.0, 1400.0), 0.5);
    }
}
