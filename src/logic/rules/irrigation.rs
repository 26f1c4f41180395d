use super::{Rule, RuleContext};
use crate::models::{Recommendation, RecommendationKind};

/// Rainfall shortfall rule
///
/// Below 600 mm/year the crop cannot finish on rain alone; 600-800 mm needs
/// top-ups at the sensitive stages.
pub struct IrrigationRule;

impl Rule for IrrigationRule {
    fn id(&self) -> &'static str {
        "irrigation"
    }

    fn name(&self) -> &'static str {
        "Rainfall Shortfall"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<Recommendation> {
        let rainfall = ctx.conditions.rainfall_mm;

        let rec = if rainfall < 600.0 {
            Recommendation::new(
                self.id(),
                RecommendationKind::Warning,
                "Critical Irrigation Needed",
                "Install drip irrigation system and ensure 3-4 irrigations per week during \
                 critical growth stages.",
            )
        } else if rainfall < 800.0 {
            Recommendation::new(
                self.id(),
                RecommendationKind::Info,
                "Supplemental Irrigation",
                "Consider supplemental irrigation during flowering and grain filling stages \
                 for optimal yield.",
            )
        } else {
            return None;
        };

        Some(rec.with_data_point("Rainfall", format!("{:.0} mm", rainfall), "Field input"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Crop, CropConditions, EnvironmentalScores, Season};

    fn evaluate(rainfall: f64) -> Option<Recommendation> {
        let conditions =
            CropConditions::new(Crop::Rice, "Punjab", Season::Kharif).with_rainfall(rainfall);
        IrrigationRule.evaluate(&RuleContext::new(&conditions, EnvironmentalScores::new(1.0, 1.0)))
    }

    #[test]
    fn critical_below_600() {
        let rec = evaluate(599.0).unwrap();
        assert_eq!(rec.kind, RecommendationKind::Warning);
        assert_eq!(rec.title, "Critical Irrigation Needed");
        assert_eq!(rec.data_points[0].value, "599 mm");
    }

    #[test]
    fn supplemental_between_600_and_800() {
        let rec = evaluate(600.0).unwrap();
        assert_eq!(rec.kind, RecommendationKind::Info);
        assert_eq!(rec.title, "Supplemental Irrigation");
        assert!(evaluate(799.9).is_some());
    }

    #[test]
    fn nothing_at_or_above_800() {
        assert!(evaluate(800.0).is_none());
        assert!(evaluate(2500.0).is_none());
    }
}
