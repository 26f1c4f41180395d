use super::{Rule, RuleContext};
use crate::models::{Recommendation, RecommendationKind};

/// Temperature stress rule
///
/// Conditions:
/// - Mean temperature >32°C: heat stress warning
/// - Mean temperature <18°C: frost/cold advisory
pub struct TemperatureStressRule;

impl Rule for TemperatureStressRule {
    fn id(&self) -> &'static str {
        "temperature_stress"
    }

    fn name(&self) -> &'static str {
        "Temperature Stress"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<Recommendation> {
        let temperature = ctx.conditions.temperature_c;

        let rec = if temperature > 32.0 {
            Recommendation::new(
                self.id(),
                RecommendationKind::Warning,
                "Heat Stress Management",
                "Apply mulching and increase irrigation frequency. Consider shade nets for \
                 sensitive crops.",
            )
        } else if temperature < 18.0 {
            Recommendation::new(
                self.id(),
                RecommendationKind::Info,
                "Cold Protection",
                "Monitor for frost and consider using crop covers during cold spells.",
            )
        } else {
            return None;
        };

        Some(rec.with_data_point("Temperature", format!("{:.1}°C", temperature), "Field input"))
    }
}
