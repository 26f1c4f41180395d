use crate::models::{AlertLevel, CropConditions, WeatherHazard, WeatherRisk};

/// One weather hazard check. Rules are independent; several may fire.
pub struct WeatherRule {
    pub id: &'static str,
    pub applies: fn(&CropConditions) -> bool,
    pub build: fn() -> WeatherRisk,
}

pub static WEATHER_RULES: [WeatherRule; 3] = [
    WeatherRule {
        id: "drought",
        applies: low_rainfall,
        build: drought,
    },
    WeatherRule {
        id: "excess_water",
        applies: high_rainfall,
        build: excess_water,
    },
    WeatherRule {
        id: "heat_stress",
        applies: extreme_heat,
        build: heat_stress,
    },
];

fn low_rainfall(c: &CropConditions) -> bool {
    c.rainfall_mm < 600.0
}

fn high_rainfall(c: &CropConditions) -> bool {
    c.rainfall_mm > 2000.0
}

fn extreme_heat(c: &CropConditions) -> bool {
    c.temperature_c > 35.0
}

fn drought() -> WeatherRisk {
    WeatherRisk {
        level: AlertLevel::High,
        hazard: WeatherHazard::Drought,
        description: "Low rainfall detected for the season".to_string(),
        recommendation: "Install drip irrigation system and use mulching".to_string(),
    }
}

fn excess_water() -> WeatherRisk {
    WeatherRisk {
        level: AlertLevel::Medium,
        hazard: WeatherHazard::ExcessWater,
        description: "High rainfall may cause waterlogging".to_string(),
        recommendation: "Ensure proper drainage and consider raised bed farming".to_string(),
    }
}

fn heat_stress() -> WeatherRisk {
    WeatherRisk {
        level: AlertLevel::Medium,
        hazard: WeatherHazard::HeatStress,
        description: "High temperature may affect crop growth".to_string(),
        recommendation: "Increase irrigation frequency and provide shade nets".to_string(),
    }
}

pub fn assess(conditions: &CropConditions) -> Vec<WeatherRisk> {
    WEATHER_RULES
        .iter()
        .filter(|rule| (rule.applies)(conditions))
        .map(|rule| {
            tracing::debug!("Weather rule {} triggered", rule.id);
            (rule.build)()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Crop, Season};

    fn conditions(rainfall: f64, temperature: f64) -> CropConditions {
        CropConditions::new(Crop::Rice, "Punjab", Season::Kharif)
            .with_rainfall(rainfall)
            .with_temperature(temperature)
    }

    fn hazards(risks: &[WeatherRisk]) -> Vec<WeatherHazard> {
        risks.iter().map(|r| r.hazard).collect()
    }

    #[test]
    fn no_risk_in_normal_season() {
        assert!(assess(&conditions(1000.0, 28.0)).is_empty());
    }

    #[test]
    fn drought_is_high() {
        let risks = assess(&conditions(599.0, 28.0));
        assert_eq!(hazards(&risks), vec![WeatherHazard::Drought]);
        assert_eq!(risks[0].level, AlertLevel::High);
        assert!(assess(&conditions(600.0, 28.0)).is_empty());
    }

    #[test]
    fn excess_water_is_medium() {
        let risks = assess(&conditions(2000.1, 28.0));
        assert_eq!(hazards(&risks), vec![WeatherHazard::ExcessWater]);
        assert_eq!(risks[0].level, AlertLevel::Medium);
        assert!(assess(&conditions(2000.0, 28.0)).is_empty());
    }

    #[test]
    fn heat_co_occurs_with_rainfall_risk() {
        let risks = assess(&conditions(400.0, 38.0));
        assert_eq!(
            hazards(&risks),
            vec![WeatherHazard::Drought, WeatherHazard::HeatStress]
        );

        let risks = assess(&conditions(2400.0, 36.0));
        assert_eq!(
            hazards(&risks),
            vec![WeatherHazard::ExcessWater, WeatherHazard::HeatStress]
        );
    }
}
