use super::{Rule, RuleContext};
use crate::models::{Recommendation, RecommendationKind};

/// Combined weather score below which the season is considered at risk
pub const WEATHER_RISK_THRESHOLD: f64 = 0.85;

/// Weather risk mitigation rule - fires on a poor combined weather score
/// regardless of which individual factor dragged it down.
pub struct WeatherRiskRule;

impl Rule for WeatherRiskRule {
    fn id(&self) -> &'static str {
        "weather_risk"
    }

    fn name(&self) -> &'static str {
        "Weather Risk Mitigation"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<Recommendation> {
        if ctx.scores.weather >= WEATHER_RISK_THRESHOLD {
            return None;
        }

        Some(
            Recommendation::new(
                self.id(),
                RecommendationKind::Warning,
                "Weather Risk Mitigation",
                "Current weather conditions may affect yield. Consider crop insurance and \
                 adaptive management practices.",
            )
            .with_data_point(
                "Weather Score",
                format!("{:.0}%", ctx.scores.weather * 100.0),
                "Calculated",
            ),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Crop, CropConditions, EnvironmentalScores, Season};

    #[test]
    fn fires_below_threshold_only() {
        let conditions = CropConditions::new(Crop::Rice, "Punjab", Season::Kharif);

        let poor = RuleContext::new(&conditions, EnvironmentalScores::new(0.84, 1.0));
        let rec = WeatherRiskRule.evaluate(&poor).unwrap();
        assert_eq!(rec.kind, RecommendationKind::Warning);
        assert_eq!(rec.data_points[0].value, "84%");

        let fair = RuleContext::new(&conditions, EnvironmentalScores::new(0.85, 1.0));
        assert!(WeatherRiskRule.evaluate(&fair).is_none());
    }
}
