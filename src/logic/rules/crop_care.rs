use super::{Rule, RuleContext};
use crate::models::{Crop, Recommendation, RecommendationKind};

/// Crop-specific husbandry note for the cereals.
///
/// Cotton, sugarcane and untabulated crops get no entry.
pub struct CropCareRule;

impl Rule for CropCareRule {
    fn id(&self) -> &'static str {
        "crop_care"
    }

    fn name(&self) -> &'static str {
        "Crop-Specific Care"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<Recommendation> {
        let (title, text) = match ctx.conditions.crop {
            Crop::Rice => (
                "Rice-Specific Care",
                "Maintain 2-5cm water level during vegetative stage. Apply silicon fertilizer \
                 for disease resistance.",
            ),
            Crop::Wheat => (
                "Wheat Management",
                "Apply balanced NPK (120:60:40) and ensure proper drainage to prevent \
                 waterlogging.",
            ),
            Crop::Maize => (
                "Maize Optimization",
                "Ensure adequate plant spacing (60x20cm) and apply side-dressing of nitrogen at \
                 knee-high stage.",
            ),
            Crop::Cotton | Crop::Sugarcane | Crop::Other(_) => return None,
        };

        Some(Recommendation::new(
            self.id(),
            RecommendationKind::Success,
            title,
            text,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CropConditions, EnvironmentalScores, Season};

    fn evaluate(crop: Crop) -> Option<Recommendation> {
        let conditions = CropConditions::new(crop, "Punjab", Season::Kharif);
        CropCareRule.evaluate(&RuleContext::new(&conditions, EnvironmentalScores::new(1.0, 1.0)))
    }

    #[test]
    fn cereals_get_care_notes() {
        assert_eq!(evaluate(Crop::Rice).unwrap().title, "Rice-Specific Care");
        assert_eq!(evaluate(Crop::Wheat).unwrap().title, "Wheat Management");
        assert_eq!(evaluate(Crop::Maize).unwrap().title, "Maize Optimization");
        assert_eq!(
            evaluate(Crop::Maize).unwrap().kind,
            RecommendationKind::Success
        );
    }

    #[test]
    fn other_crops_get_nothing() {
        assert!(evaluate(Crop::Cotton).is_none());
        assert!(evaluate(Crop::Sugarcane).is_none());
        assert!(evaluate(Crop::from("Barley")).is_none());
    }
}
