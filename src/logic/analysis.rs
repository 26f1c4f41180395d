//! Supplementary views over a prediction: yield history, factor impact,
//! regional standing and side-by-side crop comparison.

use super::advisory::weather;
use super::calculations::{round1, round2};
use crate::error::{CropwiseError, Result};
use crate::models::{
    AlertLevel, Crop, CropComparison, CropConditions, EnvironmentalScores, FactorImpact,
    FactorStatus, RegionalComparison, Standing, TrendPoint,
};
use crate::tables::{CropEconomics, MarketSnapshot, ReferenceTables};
use rand::Rng;

pub const DEFAULT_HISTORY_YEARS: usize = 6;

/// Water requirement quoted for crops with no profile
pub const DEFAULT_WATER_REQUIREMENT: &str = "600-800 mm";

/// Within this many percent of the regional average counts as similar
const SIMILAR_BAND_PERCENT: f64 = 5.0;

const MAX_COMPARED_CROPS: usize = 4;

/// Synthesize a yield history ending at `current_year` with a mild upward
/// drift. The last point is the prediction itself.
pub fn historical_trend<R: Rng + ?Sized>(
    predicted_yield: f64,
    years: usize,
    current_year: i32,
    rng: &mut R,
) -> Vec<TrendPoint> {
    (0..years)
        .map(|i| {
            let noise = 0.85 + rng.gen::<f64>() * 0.25;
            let drift = 1.0 + i as f64 * 0.02;
            TrendPoint {
                year: current_year - (years - 1 - i) as i32,
                yield_per_hectare: round1(predicted_yield * noise * drift),
                predicted: i + 1 == years,
            }
        })
        .collect()
}

fn status_for(score: f64) -> FactorStatus {
    if score > 0.95 {
        FactorStatus::Good
    } else if score > 0.85 {
        FactorStatus::Moderate
    } else {
        FactorStatus::Poor
    }
}

fn impact(weight: f64) -> u32 {
    (weight * 85.0).round().clamp(0.0, 100.0) as u32
}

fn factor(name: &str, weight: f64, status: FactorStatus) -> FactorImpact {
    FactorImpact {
        factor: name.to_string(),
        impact: impact(weight),
        status,
    }
}

/// Relative influence of each input on the prediction.
pub fn factor_analysis(conditions: &CropConditions, scores: &EnvironmentalScores) -> Vec<FactorImpact> {
    let temp_in_band = (22.0..=28.0).contains(&conditions.temperature_c);
    let humidity_in_band = (60.0..=80.0).contains(&conditions.humidity_percent);
    let in_band = |ok: bool| {
        if ok {
            FactorStatus::Good
        } else {
            FactorStatus::Moderate
        }
    };

    vec![
        factor("Rainfall", scores.weather, status_for(scores.weather)),
        factor(
            "Temperature",
            if temp_in_band { 0.95 } else { 0.8 },
            in_band(temp_in_band),
        ),
        factor("Soil pH", scores.soil, status_for(scores.soil)),
        factor(
            "Humidity",
            if humidity_in_band { 0.9 } else { 0.75 },
            in_band(humidity_in_band),
        ),
    ]
}

/// Compare a predicted yield with the typical yield for the crop.
///
/// Uses the exact state entry when present, otherwise the mean over every
/// state listed for the crop. Returns `None` when the crop has no regional
/// data.
pub fn compare_to_region(
    tables: &ReferenceTables,
    crop: &Crop,
    location: &str,
    predicted_yield: f64,
) -> Option<RegionalComparison> {
    let averages = &tables.crop(crop)?.regional_averages;
    if averages.is_empty() {
        return None;
    }

    let regional_average = averages
        .get(location)
        .copied()
        .unwrap_or_else(|| averages.values().sum::<f64>() / averages.len() as f64);

    let difference = predicted_yield - regional_average;
    let percentage = difference / regional_average * 100.0;
    let standing = if percentage.abs() < SIMILAR_BAND_PERCENT {
        Standing::Similar
    } else if percentage > 0.0 {
        Standing::Above
    } else {
        Standing::Below
    };

    Some(RegionalComparison {
        location: location.to_string(),
        regional_average: round1(regional_average),
        predicted_yield,
        difference: round1(difference),
        percentage_difference: round1(percentage),
        standing,
    })
}

/// Rough tonnes-per-hectare estimate used only for ranking crops.
pub fn quick_yield(economics: &CropEconomics, conditions: &CropConditions) -> f64 {
    let mut estimate = economics.base_yield_t_ha;

    estimate *= if conditions.rainfall_mm < 600.0 {
        0.7
    } else if conditions.rainfall_mm > 1500.0 {
        0.85
    } else {
        1.1
    };

    estimate *= if conditions.temperature_c > 35.0 {
        0.8
    } else if conditions.temperature_c < 15.0 {
        0.75
    } else {
        1.05
    };

    estimate *= if (6.5..=7.5).contains(&conditions.soil_ph) {
        1.1
    } else {
        0.9
    };

    round2(estimate)
}

/// Evaluate between two and four distinct crops under the same conditions.
pub fn compare_crops(
    tables: &ReferenceTables,
    conditions: &CropConditions,
    crops: &[Crop],
) -> Result<Vec<CropComparison>> {
    conditions.validate()?;

    if crops.len() < 2 || crops.len() > MAX_COMPARED_CROPS {
        return Err(CropwiseError::InvalidInput(format!(
            "compare between 2 and {} crops (got {})",
            MAX_COMPARED_CROPS,
            crops.len()
        )));
    }
    if let Some((i, dup)) = crops
        .iter()
        .enumerate()
        .find(|(i, c)| crops[..*i].contains(c))
    {
        return Err(CropwiseError::InvalidInput(format!(
            "crop {} listed more than once (position {})",
            dup,
            i + 1
        )));
    }

    // Weather hazards depend only on the shared conditions
    let risk_level = weather::assess(conditions)
        .iter()
        .map(|r| r.level)
        .max()
        .unwrap_or(AlertLevel::Low);

    let comparisons = crops
        .iter()
        .map(|crop| {
            let profile = tables.crop(crop);
            let economics = profile.map(|p| p.economics).unwrap_or_default();
            let predicted_yield = quick_yield(&economics, conditions);
            let revenue = predicted_yield * economics.price_per_kg * 1000.0;

            CropComparison {
                crop: crop.clone(),
                predicted_yield,
                profitability: (revenue - economics.cost_per_hectare).round() as i64,
                risk_level,
                water_requirement: profile
                    .map(|p| p.water_requirement.clone())
                    .unwrap_or_else(|| DEFAULT_WATER_REQUIREMENT.to_string()),
                market_price: profile
                    .map(|p| p.market.price.clone())
                    .unwrap_or_else(|| MarketSnapshot::unknown().price),
                season: conditions.season.clone(),
            }
        })
        .collect();

    Ok(comparisons)
}

/// Most profitable option; the earliest entry wins ties.
pub fn best_option(comparisons: &[CropComparison]) -> Option<&CropComparison> {
    comparisons
        .iter()
        .reduce(|best, c| if c.profitability > best.profitability { c } else { best })
}
