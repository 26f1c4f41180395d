//! Farming advisory, independent of the yield prediction.

pub mod general;
pub mod pests;
pub mod schedules;
pub mod soil;
pub mod weather;

use crate::error::Result;
use crate::models::{AlertLevel, CropConditions, FarmingAdvisory, MarketInsight};
use crate::tables::{MarketSnapshot, ReferenceTables};
use general::AdvisoryContext;

/// Advisory generator bound to a set of reference tables.
pub struct Advisor<'t> {
    tables: &'t ReferenceTables,
}

impl<'t> Advisor<'t> {
    pub fn new(tables: &'t ReferenceTables) -> Self {
        Self { tables }
    }

    pub fn advise(&self, conditions: &CropConditions) -> Result<FarmingAdvisory> {
        conditions.validate()?;

        let profile = self.tables.crop(&conditions.crop);
        let weather_risks = weather::assess(conditions);
        let soil_advice = soil::advise(conditions.soil_ph);
        let pest_risks = pests::assess(self.tables, conditions);
        let (planting_date, harvest_date) =
            schedules::growing_window(self.tables, &conditions.crop, &conditions.season);
        let irrigation_schedule =
            schedules::irrigation(conditions.rainfall_mm, conditions.temperature_c);
        let fertilizer_schedule = schedules::fertilizer(profile, conditions.soil_ph);

        let market = profile
            .map(|p| p.market.clone())
            .unwrap_or_else(MarketSnapshot::unknown);
        let market_insights = MarketInsight {
            current_price: market.price,
            trend: market.trend,
            recommendation: market.recommendation,
        };

        let recommendations = general::recommendations(&AdvisoryContext {
            conditions,
            weather_risks: &weather_risks,
            soil_advice: &soil_advice,
            profile,
        });

        let high_risk = weather_risks
            .iter()
            .any(|r| r.level == AlertLevel::High);
        let insurance_advice = general::insurance_advice(&conditions.crop, high_risk);

        tracing::debug!(
            crop = %conditions.crop,
            weather_risks = weather_risks.len(),
            pest_risks = pest_risks.len(),
            "Advisory complete"
        );

        Ok(FarmingAdvisory {
            recommendations,
            weather_risks,
            soil_advice,
            pest_risks,
            planting_date,
            harvest_date,
            irrigation_schedule,
            fertilizer_schedule,
            market_insights,
            insurance_advice,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CropwiseError;
    use crate::models::{Crop, Season, Trend, WeatherHazard};

    fn advisor() -> Advisor<'static> {
        Advisor::new(ReferenceTables::shared())
    }

    fn dry_wheat() -> CropConditions {
        CropConditions::new("Wheat", "Punjab", "Rabi (Winter)")
            .with_rainfall(500.0)
            .with_temperature(19.0)
            .with_humidity(65.0)
            .with_soil_ph(7.0)
            .with_area(10.0)
    }

    #[test]
    fn dry_punjab_wheat() {
        let advisory = advisor().advise(&dry_wheat()).unwrap();

        assert_eq!(advisory.weather_risks.len(), 1);
        assert_eq!(advisory.weather_risks[0].hazard, WeatherHazard::Drought);
        assert_eq!(advisory.weather_risks[0].level, AlertLevel::High);
        assert_eq!(advisory.soil_advice.condition, "Optimal soil pH");
        assert_eq!(advisory.planting_date, "November-December");
        assert_eq!(advisory.harvest_date, "March-April");
        assert!(advisory.pest_risks.is_empty());

        assert_eq!(advisory.irrigation_schedule.len(), 2);
        assert_eq!(advisory.fertilizer_schedule.len(), 2);
        assert_eq!(advisory.market_insights.trend, Trend::Rising);
        assert_eq!(advisory.market_insights.current_price, "₹22-27/kg");
        assert!(advisory.insurance_advice.contains("Strongly recommend"));
        assert_eq!(advisory.overall_risk(), AlertLevel::High);

        // drought (2) + wheat tips (2) + baseline (3)
        assert_eq!(advisory.recommendations.len(), 7);
        assert_eq!(
            advisory.recommendations[0],
            "Install water-efficient irrigation systems"
        );
    }

    #[test]
    fn humid_hot_rice_pests() {
        let conditions = CropConditions::new(Crop::Rice, "West Bengal", Season::Kharif)
            .with_humidity(85.0)
            .with_temperature(31.0);
        let advisory = advisor().advise(&conditions).unwrap();

        let pests: Vec<_> = advisory
            .pest_risks
            .iter()
            .map(|p| (p.pest.as_str(), p.risk))
            .collect();
        assert_eq!(
            pests,
            vec![
                ("Brown Planthopper", AlertLevel::High),
                ("Rice Blast", AlertLevel::Medium),
            ]
        );
        assert!(advisory.weather_risks.is_empty());
        assert!(advisory.insurance_advice.starts_with("Consider crop insurance"));
        assert_eq!(
            advisory.irrigation_schedule.last().unwrap(),
            "Avoid midday watering to prevent evaporation"
        );
    }

    #[test]
    fn unknown_crop_gets_generic_fallbacks() {
        let conditions = CropConditions::new("Barley", "Atlantis", "Spring");
        let advisory = advisor().advise(&conditions).unwrap();

        assert_eq!(advisory.planting_date, "Consult local expert");
        assert_eq!(advisory.harvest_date, "Consult local expert");
        assert_eq!(advisory.market_insights.current_price, "Contact local market");
        assert_eq!(advisory.market_insights.trend, Trend::Stable);
        assert_eq!(advisory.fertilizer_schedule.len(), 2);
        assert!(advisory.pest_risks.is_empty());
        assert!(advisory.insurance_advice.contains("Barley"));
    }

    #[test]
    fn advisory_is_deterministic() {
        let a = advisor().advise(&dry_wheat()).unwrap();
        let b = advisor().advise(&dry_wheat()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn invalid_input_is_rejected() {
        let result = advisor().advise(&dry_wheat().with_soil_ph(15.0));
        assert!(matches!(result, Err(CropwiseError::InvalidInput(_))));

        let result = advisor().advise(&dry_wheat().with_rainfall(-1.0));
        assert!(matches!(result, Err(CropwiseError::InvalidInput(_))));
    }
}
