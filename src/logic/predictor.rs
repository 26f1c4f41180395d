use super::assessment::{classify_risk, confidence, confidence_jitter};
use super::calculations::to_percent;
use super::ensemble::{estimate_yield, natural_variation, EnsembleInputs};
use super::rules::{RuleContext, RulesEngine};
use super::scoring;
use crate::error::Result;
use crate::models::{CropConditions, EnvironmentalScores, PredictionResult};
use crate::tables::ReferenceTables;
use rand::Rng;

/// Yield predictor bound to a set of reference tables.
pub struct Predictor<'t> {
    tables: &'t ReferenceTables,
    rules: RulesEngine,
}

impl<'t> Predictor<'t> {
    pub fn new(tables: &'t ReferenceTables) -> Self {
        Self {
            tables,
            rules: RulesEngine::new(),
        }
    }

    pub fn scores(conditions: &CropConditions) -> EnvironmentalScores {
        scoring::score(
            conditions.rainfall_mm,
            conditions.temperature_c,
            conditions.humidity_percent,
            conditions.soil_ph,
        )
    }

    /// Predict yield, confidence, risk and recommendations.
    ///
    /// Draws two values from `rng`: the yield variation factor, then the
    /// confidence jitter.
    pub fn predict<R: Rng + ?Sized>(
        &self,
        conditions: &CropConditions,
        rng: &mut R,
    ) -> Result<PredictionResult> {
        conditions.validate()?;

        let scores = Self::scores(conditions);
        let inputs = EnsembleInputs::resolve(
            self.tables,
            &conditions.crop,
            &conditions.location,
            &conditions.season,
        );

        if self.tables.crop(&conditions.crop).is_none() {
            tracing::debug!(
                "No yield profile for {}, using base yield {} without clamping",
                conditions.crop,
                inputs.base_yield
            );
        }

        let variation = natural_variation(rng);
        let estimate = estimate_yield(
            self.tables,
            &conditions.crop,
            &inputs,
            &scores,
            variation,
            conditions.area_hectares,
        );
        let confidence = confidence(&scores, confidence_jitter(rng));
        let risk_level = classify_risk(scores.overall());
        let recommendations = self.rules.evaluate(&RuleContext::new(conditions, scores));

        tracing::debug!(
            crop = %conditions.crop,
            weather = scores.weather,
            soil = scores.soil,
            variation,
            yield_per_hectare = estimate.yield_per_hectare,
            "Prediction complete"
        );

        Ok(PredictionResult {
            yield_per_hectare: estimate.yield_per_hectare,
            total_production: estimate.total_production,
            confidence,
            risk_level,
            risk_color: risk_level.color(),
            weather_score: to_percent(scores.weather),
            soil_score: to_percent(scores.soil),
            recommendations,
        })
    }
}
