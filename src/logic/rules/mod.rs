pub mod crop_care;
pub mod engine;
pub mod irrigation;
pub mod soil_ph;
pub mod temperature_stress;
pub mod weather_risk;

pub use engine::RulesEngine;

use crate::models::{CropConditions, EnvironmentalScores, Recommendation};

/// Inputs every yield recommendation rule sees
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    pub conditions: &'a CropConditions,
    pub scores: EnvironmentalScores,
}

impl<'a> RuleContext<'a> {
    pub fn new(conditions: &'a CropConditions, scores: EnvironmentalScores) -> Self {
        Self { conditions, scores }
    }
}

/// Trait for agronomic rules attached to a yield prediction
pub trait Rule: Send + Sync {
    /// Unique identifier for this rule
    fn id(&self) -> &'static str;

    /// Human-readable name
    fn name(&self) -> &'static str;

    /// Evaluate the rule and return a recommendation if conditions are met
    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<Recommendation>;
}
