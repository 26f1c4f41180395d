//! Environmental quality scoring.
//!
//! Each factor maps onto a multiplier around 1.0: values inside the optimal
//! band score highest, values outside decay linearly with distance.

use super::calculations::band_fraction;
use crate::models::EnvironmentalScores;
use std::f64::consts::PI;

/// Optimal annual rainfall band (mm)
pub const RAINFALL_OPTIMAL: (f64, f64) = (800.0, 1400.0);
/// Optimal mean temperature band (°C)
pub const TEMPERATURE_OPTIMAL: (f64, f64) = (22.0, 28.0);
/// Optimal relative humidity band (%)
pub const HUMIDITY_OPTIMAL: (f64, f64) = (60.0, 80.0);
/// Soil pH band scored as ideal
pub const SOIL_PH_OPTIMAL: (f64, f64) = (6.0, 7.5);

pub const WEATHER_SCORE_MIN: f64 = 0.70;
pub const WEATHER_SCORE_MAX: f64 = 1.30;

pub fn rainfall_score(rainfall_mm: f64) -> f64 {
    let (min, max) = RAINFALL_OPTIMAL;
    if rainfall_mm < min {
        0.7 + (rainfall_mm / min) * 0.25
    } else if rainfall_mm > max {
        1.0 - ((rainfall_mm - max) / 1000.0) * 0.4
    } else {
        0.95 + (band_fraction(rainfall_mm, min, max) * PI).sin() * 0.15
    }
}

pub fn temperature_score(temperature_c: f64) -> f64 {
    let (min, max) = TEMPERATURE_OPTIMAL;
    if temperature_c < min {
        0.75 + (temperature_c / min) * 0.2
    } else if temperature_c > max {
        1.0 - ((temperature_c - max) / 15.0) * 0.35
    } else {
        0.95 + (band_fraction(temperature_c, min, max) * PI).cos() * 0.1
    }
}

pub fn humidity_score(humidity_percent: f64) -> f64 {
    let (min, max) = HUMIDITY_OPTIMAL;
    if humidity_percent < min {
        0.8 + (humidity_percent / min) * 0.15
    } else if humidity_percent > max {
        0.95 - ((humidity_percent - max) / 20.0) * 0.25
    } else {
        0.95
    }
}

/// Weighted blend of rainfall (40%), temperature (40%) and humidity (20%),
/// clamped to 0.70-1.30.
pub fn weather_score(rainfall_mm: f64, temperature_c: f64, humidity_percent: f64) -> f64 {
    let blended = rainfall_score(rainfall_mm) * 0.4
        + temperature_score(temperature_c) * 0.4
        + humidity_score(humidity_percent) * 0.2;
    blended.clamp(WEATHER_SCORE_MIN, WEATHER_SCORE_MAX)
}

pub fn soil_score(ph: f64) -> f64 {
    let (ideal_min, ideal_max) = SOIL_PH_OPTIMAL;
    if ph < 5.5 {
        0.75 + (ph / 5.5) * 0.15
    } else if ph > 8.0 {
        0.95 - ((ph - 8.0) / 2.0) * 0.25
    } else if (ideal_min..=ideal_max).contains(&ph) {
        1.0
    } else if ph < ideal_min {
        0.9 + (ph - 5.5) / 0.5 * 0.1
    } else {
        0.9 + (8.0 - ph) / 0.5 * 0.05
    }
}

pub fn score(
    rainfall_mm: f64,
    temperature_c: f64,
    humidity_percent: f64,
    soil_ph: f64,
) -> EnvironmentalScores {
    EnvironmentalScores::new(
        weather_score(rainfall_mm, temperature_c, humidity_percent),
        soil_score(soil_ph),
    )
}
