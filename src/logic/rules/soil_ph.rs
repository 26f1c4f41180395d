use super::{Rule, RuleContext};
use crate::models::{Recommendation, RecommendationKind};

/// Soil reaction correction rule
///
/// Acidic soils (pH <6.0) get a liming dose; alkaline soils (pH >8.0) get
/// gypsum and organic matter.
pub struct SoilPhRule;

impl Rule for SoilPhRule {
    fn id(&self) -> &'static str {
        "soil_ph"
    }

    fn name(&self) -> &'static str {
        "Soil pH Correction"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<Recommendation> {
        let ph = ctx.conditions.soil_ph;

        let rec = if ph < 6.0 {
            Recommendation::new(
                self.id(),
                RecommendationKind::Info,
                "Soil pH Adjustment",
                "Apply 200-300 kg lime per hectare to increase soil pH to optimal range (6.0-7.5).",
            )
        } else if ph > 8.0 {
            Recommendation::new(
                self.id(),
                RecommendationKind::Info,
                "Alkaline Soil Treatment",
                "Apply gypsum and organic matter to reduce soil alkalinity and improve nutrient \
                 availability.",
            )
        } else {
            return None;
        };

        Some(rec.with_data_point("Soil pH", format!("{:.1}", ph), "Field input"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Crop, CropConditions, EnvironmentalScores, Season};

    fn evaluate(ph: f64) -> Option<Recommendation> {
        let conditions = CropConditions::new(Crop::Wheat, "Haryana", Season::Rabi).with_soil_ph(ph);
        SoilPhRule.evaluate(&RuleContext::new(&conditions, EnvironmentalScores::new(1.0, 1.0)))
    }

    #[test]
    fn acidic_soil_gets_lime() {
        let rec = evaluate(5.2).unwrap();
        assert_eq!(rec.title, "Soil pH Adjustment");
        assert!(rec.text.contains("lime"));
    }

    #[test]
    fn alkaline_soil_gets_gypsum() {
        let rec = evaluate(8.4).unwrap();
        assert_eq!(rec.title, "Alkaline Soil Treatment");
        assert!(rec.text.contains("gypsum"));
    }

    #[test]
    fn neutral_range_is_silent() {
        assert!(evaluate(6.0).is_none());
        assert!(evaluate(7.0).is_none());
        assert!(evaluate(8.0).is_none());
    }
}
