use super::calculations::round1;
use crate::models::{Crop, EnvironmentalScores, Season};
use crate::tables::{ReferenceTables, DEFAULT_BASE_YIELD};
use rand::Rng;

/// Lower bound of the natural variation factor
pub const VARIATION_MIN: f64 = 0.92;
/// Width of the natural variation band (±8% around 1.0)
pub const VARIATION_SPAN: f64 = 0.16;

pub fn season_multiplier(season: &Season) -> f64 {
    match season {
        Season::Kharif => 1.05,
        Season::Rabi => 1.0,
        Season::Zaid | Season::Other(_) => 0.95,
    }
}

/// Ensemble inputs resolved from the reference tables.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnsembleInputs {
    pub base_yield: f64,
    pub regional_multiplier: f64,
    pub season_multiplier: f64,
}

impl EnsembleInputs {
    pub fn resolve(tables: &ReferenceTables, crop: &Crop, location: &str, season: &Season) -> Self {
        let base_yield = tables
            .crop(crop)
            .map(|p| p.yield_range.optimal)
            .unwrap_or(DEFAULT_BASE_YIELD);
        let regional_multiplier = tables.regional_multiplier(location).unwrap_or(1.0);

        Self {
            base_yield,
            regional_multiplier,
            season_multiplier: season_multiplier(season),
        }
    }

    /// The three weighted estimates, before averaging.
    pub fn trees(&self, scores: &EnvironmentalScores) -> [f64; 3] {
        let base = self.base_yield;
        let (w, s) = (scores.weather, scores.soil);

        [
            base * w * 0.7 + base * s * 0.3,
            base * (w * 0.5 + s * 0.3 + self.regional_multiplier * 0.2),
            base * w * s * self.season_multiplier,
        ]
    }

    pub fn mean(&self, scores: &EnvironmentalScores) -> f64 {
        self.trees(scores).iter().sum::<f64>() / 3.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YieldEstimate {
    pub yield_per_hectare: f64,
    pub total_production: f64,
}

/// Draw the natural variation factor in [0.92, 1.08).
pub fn natural_variation<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    VARIATION_MIN + rng.gen::<f64>() * VARIATION_SPAN
}

/// Combine the ensemble mean with the variation factor, clamp to the crop's
/// realistic range, and scale by area.
pub fn estimate_yield(
    tables: &ReferenceTables,
    crop: &Crop,
    inputs: &EnsembleInputs,
    scores: &EnvironmentalScores,
    variation: f64,
    area_hectares: f64,
) -> YieldEstimate {
    let mut predicted = inputs.mean(scores) * variation;

    // Unknown crops have no realistic range to clamp against
    if let Some(profile) = tables.crop(crop) {
        predicted = profile.yield_range.clamp(predicted);
    }

    YieldEstimate {
        yield_per_hectare: round1(predicted),
        total_production: round1(predicted * area_hectares),
    }
}
