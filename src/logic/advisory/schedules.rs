use crate::models::{Crop, Season};
use crate::tables::{CropProfile, ReferenceTables, CONSULT_LOCAL_EXPERT};

/// Planting and harvest window for a crop/season pair.
pub fn growing_window(tables: &ReferenceTables, crop: &Crop, season: &Season) -> (String, String) {
    match tables.growing_window(crop, season) {
        Some(window) => (window.planting.clone(), window.harvest.clone()),
        None => (
            CONSULT_LOCAL_EXPERT.to_string(),
            CONSULT_LOCAL_EXPERT.to_string(),
        ),
    }
}

pub fn irrigation(rainfall_mm: f64, temperature_c: f64) -> Vec<String> {
    let mut schedule: Vec<&str> = if rainfall_mm < 800.0 {
        vec![
            "Frequent irrigation needed - every 7-10 days",
            "Use drip irrigation to conserve water",
        ]
    } else if rainfall_mm > 1500.0 {
        vec![
            "Minimal irrigation required",
            "Focus on drainage management",
        ]
    } else {
        vec!["Moderate irrigation - every 10-14 days"]
    };

    if temperature_c > 30.0 {
        schedule.push("Early morning irrigation recommended");
        schedule.push("Avoid midday watering to prevent evaporation");
    }

    schedule.into_iter().map(String::from).collect()
}

/// Crop NPK split followed by any pH correction step.
pub fn fertilizer(profile: Option<&CropProfile>, soil_ph: f64) -> Vec<String> {
    let mut schedule = match profile {
        Some(p) if !p.fertilizer_schedule.is_empty() => p.fertilizer_schedule.clone(),
        _ => vec![
            "Follow crop-specific fertilizer recommendations".to_string(),
            "Apply based on soil test results".to_string(),
        ],
    };

    if soil_ph < 6.0 {
        schedule.push("Additional lime application recommended".to_string());
    } else if soil_ph > 8.0 {
        schedule.push("Add gypsum to improve soil structure".to_string());
    }

    schedule
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn windows_from_table() {
        let tables = ReferenceTables::shared();
        assert_eq!(
            growing_window(tables, &Crop::Wheat, &Season::Rabi),
            ("November-December".to_string(), "March-April".to_string())
        );
        assert_eq!(
            growing_window(tables, &Crop::Rice, &Season::Zaid),
            ("March-April".to_string(), "July-August".to_string())
        );
    }

    #[test]
    fn unmapped_window_falls_back() {
        let tables = ReferenceTables::shared();
        let expected = (
            CONSULT_LOCAL_EXPERT.to_string(),
            CONSULT_LOCAL_EXPERT.to_string(),
        );
        assert_eq!(growing_window(tables, &Crop::Wheat, &Season::Kharif), expected);
        assert_eq!(
            growing_window(tables, &Crop::from("Barley"), &Season::Rabi),
            expected
        );
    }

    #[test]
    fn irrigation_bands() {
        assert_eq!(irrigation(700.0, 25.0).len(), 2);
        assert_eq!(irrigation(700.0, 25.0)[1], "Use drip irrigation to conserve water");
        assert_eq!(irrigation(1600.0, 25.0)[0], "Minimal irrigation required");
        assert_eq!(
            irrigation(1000.0, 25.0),
            vec!["Moderate irrigation - every 10-14 days".to_string()]
        );
    }

    #[test]
    fn hot_weather_adds_morning_watering() {
        let schedule = irrigation(1000.0, 31.0);
        assert_eq!(schedule.len(), 3);
        assert_eq!(schedule[1], "Early morning irrigation recommended");
        assert!(irrigation(1000.0, 30.0).len() == 1);
    }

    #[test]
    fn crop_fertilizer_schedules() {
        let tables = ReferenceTables::shared();
        assert_eq!(fertilizer(tables.crop(&Crop::Rice), 6.8).len(), 3);
        assert_eq!(fertilizer(tables.crop(&Crop::Wheat), 6.8).len(), 2);
        assert_eq!(fertilizer(tables.crop(&Crop::Maize), 6.8).len(), 3);

        let cotton = fertilizer(tables.crop(&Crop::Cotton), 6.8);
        assert_eq!(cotton[1], "Apply based on soil test results");
        assert_eq!(fertilizer(None, 6.8), cotton);
    }

    #[test]
    fn ph_correction_is_appended() {
        let tables = ReferenceTables::shared();
        let acidic = fertilizer(tables.crop(&Crop::Wheat), 5.5);
        assert_eq!(acidic.last().unwrap(), "Additional lime application recommended");

        let alkaline = fertilizer(None, 8.5);
        assert_eq!(alkaline.len(), 3);
        assert_eq!(alkaline.last().unwrap(), "Add gypsum to improve soil structure");
    }
}
