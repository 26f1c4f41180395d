use crate::models::{Crop, CropConditions, SoilAdvice, WeatherHazard, WeatherRisk};
use crate::tables::CropProfile;

/// Inputs available to the general recommendation rules.
pub struct AdvisoryContext<'a> {
    pub conditions: &'a CropConditions,
    pub weather_risks: &'a [WeatherRisk],
    pub soil_advice: &'a SoilAdvice,
    pub profile: Option<&'a CropProfile>,
}

impl AdvisoryContext<'_> {
    fn has_hazard(&self, hazard: WeatherHazard) -> bool {
        self.weather_risks.iter().any(|r| r.hazard == hazard)
    }
}

type GeneralRule = fn(&AdvisoryContext<'_>) -> Vec<String>;

/// Evaluated in order; each contributes zero or more lines.
const GENERAL_RULES: [(&str, GeneralRule); 5] = [
    ("drought", drought_lines),
    ("heat", heat_lines),
    ("soil", soil_lines),
    ("agronomy", agronomic_tips),
    ("baseline", baseline_lines),
];

fn drought_lines(ctx: &AdvisoryContext<'_>) -> Vec<String> {
    if !ctx.has_hazard(WeatherHazard::Drought) {
        return Vec::new();
    }
    vec![
        "Install water-efficient irrigation systems".to_string(),
        "Use drought-resistant crop varieties".to_string(),
    ]
}

fn heat_lines(ctx: &AdvisoryContext<'_>) -> Vec<String> {
    if !ctx.has_hazard(WeatherHazard::HeatStress) {
        return Vec::new();
    }
    vec![
        "Provide shade nets during peak summer".to_string(),
        "Increase irrigation frequency".to_string(),
    ]
}

fn soil_lines(ctx: &AdvisoryContext<'_>) -> Vec<String> {
    let ph = ctx.conditions.soil_ph;
    if ph < 6.5 || ph > 7.5 {
        vec![ctx.soil_advice.advice.clone()]
    } else {
        Vec::new()
    }
}

fn agronomic_tips(ctx: &AdvisoryContext<'_>) -> Vec<String> {
    ctx.profile
        .map(|p| p.agronomic_tips.clone())
        .unwrap_or_default()
}

fn baseline_lines(_ctx: &AdvisoryContext<'_>) -> Vec<String> {
    vec![
        "Regular soil testing every 2-3 years".to_string(),
        "Use organic fertilizers to improve soil health".to_string(),
        "Implement integrated pest management".to_string(),
    ]
}

pub fn recommendations(ctx: &AdvisoryContext<'_>) -> Vec<String> {
    GENERAL_RULES
        .iter()
        .flat_map(|(id, rule)| {
            let lines = rule(ctx);
            if !lines.is_empty() {
                tracing::trace!("General rule {} added {} line(s)", id, lines.len());
            }
            lines
        })
        .collect()
}

/// PMFBY guidance, stronger when any high weather risk is present.
pub fn insurance_advice(crop: &Crop, high_weather_risk: bool) -> String {
    if high_weather_risk {
        format!(
            "High weather risks detected. Strongly recommend Pradhan Mantri Fasal Bima Yojana \
             (PMFBY) insurance for {}. Coverage includes drought, flood, and pest damages.",
            crop
        )
    } else {
        format!(
            "Consider crop insurance for protection against unforeseen weather events. \
             PMFBY offers affordable premiums for {} cultivation.",
            crop
        )
    }
}
