use super::{
    crop_care::CropCareRule, temperature_stress::TemperatureStressRule, irrigation::IrrigationRule,
    soil_ph::SoilPhRule, weather_risk::WeatherRiskRule, Rule, RuleContext,
};
use crate::models::Recommendation;

/// Ordered rule set. Output order follows rule order, which callers rely on
/// for display.
pub struct RulesEngine {
    rules: Vec<Box<dyn Rule>>,
}

impl RulesEngine {
    pub fn new() -> Self {
        let rules: Vec<Box<dyn Rule>> = vec![
            Box::new(IrrigationRule),
            Box::new(TemperatureStressRule),
            Box::new(SoilPhRule),
            Box::new(CropCareRule),
            Box::new(WeatherRiskRule),
        ];

        Self { rules }
    }

    pub fn evaluate(&self, ctx: &RuleContext<'_>) -> Vec<Recommendation> {
        self.rules
            .iter()
            .filter_map(|rule| {
                let rec = rule.evaluate(ctx);
                if rec.is_some() {
                    tracing::debug!("Rule {} triggered", rule.id());
                }
                rec
            })
            .collect()
    }

    pub fn evaluate_rule(&self, rule_id: &str, ctx: &RuleContext<'_>) -> Option<Recommendation> {
        self.rules
            .iter()
            .find(|r| r.id() == rule_id)
            .and_then(|rule| rule.evaluate(ctx))
    }

    pub fn list_rules(&self) -> Vec<(&'static str, &'static str)> {
        self.rules.iter().map(|r| (r.id(), r.name())).collect()
    }
}

impl Default for RulesEngine {
    fn default() -> Self {
        Self::new()
    }
}
