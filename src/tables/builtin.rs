use super::{
    CropEconomics, CropProfile, GrowingWindow, MarketSnapshot, PestRule, PestTrigger,
    ReferenceTables, YieldRange,
};
use crate::models::{AlertLevel, Crop, Season, Trend};
use std::collections::BTreeMap;

pub(super) fn tables() -> ReferenceTables {
    let crops = [
        (Crop::Rice, rice()),
        (Crop::Wheat, wheat()),
        (Crop::Maize, maize()),
        (Crop::Cotton, cotton()),
        (Crop::Sugarcane, sugarcane()),
    ]
    .into_iter()
    .collect();

    ReferenceTables {
        crops,
        regional_multipliers: regional_multipliers(),
        pest_rules: pest_rules(),
    }
}

fn window(planting: &str, harvest: &str) -> GrowingWindow {
    GrowingWindow {
        planting: planting.to_string(),
        harvest: harvest.to_string(),
    }
}

fn market(price: &str, trend: Trend, recommendation: &str) -> MarketSnapshot {
    MarketSnapshot {
        price: price.to_string(),
        trend,
        recommendation: recommendation.to_string(),
    }
}

fn lines(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn by_state(items: &[(&str, f64)]) -> BTreeMap<String, f64> {
    items.iter().map(|(k, v)| (k.to_string(), *v)).collect()
}

fn rice() -> CropProfile {
    CropProfile {
        yield_range: YieldRange {
            min: 42.0,
            max: 58.0,
            optimal: 50.0,
        },
        windows: [
            (Season::Kharif, window("June-July", "November-December")),
            (Season::Rabi, window("November-December", "April-May")),
            (Season::Zaid, window("March-April", "July-August")),
        ]
        .into_iter()
        .collect(),
        fertilizer_schedule: lines(&[
            "Basal: 50% N, 100% P, 100% K at transplanting",
            "Top dress: 25% N at tillering stage",
            "Top dress: 25% N at panicle initiation",
        ]),
        market: market(
            "₹20-25/kg",
            Trend::Stable,
            "Good time to sell, prices stable",
        ),
        agronomic_tips: lines(&[
            "Maintain 2-3 cm water level in field",
            "Use certified seeds for better yield",
        ]),
        water_requirement: "1200-1500 mm".to_string(),
        economics: CropEconomics {
            base_yield_t_ha: 4.5,
            price_per_kg: 22.5,
            cost_per_hectare: 45000.0,
        },
        regional_averages: by_state(&[
            ("Punjab", 57.0),
            ("Haryana", 54.0),
            ("Uttar Pradesh", 48.0),
            ("West Bengal", 52.0),
            ("Tamil Nadu", 46.0),
            ("Andhra Pradesh", 50.0),
            ("Telangana", 49.0),
            ("Karnataka", 45.0),
            ("Maharashtra", 44.0),
            ("Bihar", 42.0),
            ("Odisha", 40.0),
            ("Gujarat", 47.0),
            ("Madhya Pradesh", 43.0),
            ("Rajasthan", 38.0),
        ]),
    }
}

fn wheat() -> CropProfile {
    CropProfile {
        yield_range: YieldRange {
            min: 28.0,
            max: 42.0,
            optimal: 35.0,
        },
        windows: [(Season::Rabi, window("November-December", "March-April"))]
            .into_iter()
            .collect(),
        fertilizer_schedule: lines(&[
            "Basal: 50% N, 100% P, 100% K at sowing",
            "Top dress: 50% N at crown root initiation",
        ]),
        market: market(
            "₹22-27/kg",
            Trend::Rising,
            "Consider holding for better prices",
        ),
        agronomic_tips: lines(&[
            "Ensure proper seed rate (100-125 kg/ha)",
            "Monitor for rust diseases regularly",
        ]),
        water_requirement: "450-650 mm".to_string(),
        economics: CropEconomics {
            base_yield_t_ha: 3.2,
            price_per_kg: 24.5,
            cost_per_hectare: 40000.0,
        },
        regional_averages: by_state(&[
            ("Punjab", 42.0),
            ("Haryana", 40.0),
            ("Uttar Pradesh", 36.0),
            ("Madhya Pradesh", 34.0),
            ("Rajasthan", 32.0),
            ("Maharashtra", 30.0),
            ("Gujarat", 35.0),
            ("Bihar", 29.0),
            ("West Bengal", 31.0),
            ("Karnataka", 28.0),
            ("Tamil Nadu", 26.0),
            ("Andhra Pradesh", 27.0),
            ("Telangana", 28.0),
            ("Odisha", 25.0),
        ]),
    }
}

fn maize() -> CropProfile {
    CropProfile {
        yield_range: YieldRange {
            min: 48.0,
            max: 68.0,
            optimal: 58.0,
        },
        windows: [
            (Season::Kharif, window("June-July", "September-October")),
            (Season::Rabi, window("November-December", "March-April")),
            (Season::Zaid, window("February-March", "June-July")),
        ]
        .into_iter()
        .collect(),
        fertilizer_schedule: lines(&[
            "Basal: 25% N, 100% P, 100% K at sowing",
            "Top dress: 50% N at knee height stage",
            "Top dress: 25% N at tasseling stage",
        ]),
        market: market(
            "₹18-22/kg",
            Trend::Falling,
            "Sell soon, prices may decline further",
        ),
        agronomic_tips: lines(&[
            "Maintain plant spacing of 20x75 cm",
            "Remove side shoots for better grain development",
        ]),
        water_requirement: "500-700 mm".to_string(),
        economics: CropEconomics {
            base_yield_t_ha: 5.8,
            price_per_kg: 20.0,
            cost_per_hectare: 35000.0,
        },
        regional_averages: by_state(&[
            ("Karnataka", 65.0),
            ("Telangana", 62.0),
            ("Tamil Nadu", 58.0),
            ("Andhra Pradesh", 60.0),
            ("Maharashtra", 55.0),
            ("Gujarat", 57.0),
            ("Madhya Pradesh", 52.0),
            ("Uttar Pradesh", 54.0),
            ("Bihar", 48.0),
            ("Punjab", 59.0),
            ("Haryana", 58.0),
            ("Rajasthan", 45.0),
            ("West Bengal", 50.0),
            ("Odisha", 47.0),
        ]),
    }
}

fn cotton() -> CropProfile {
    CropProfile {
        yield_range: YieldRange {
            min: 12.0,
            max: 20.0,
            optimal: 16.0,
        },
        windows: [(Season::Kharif, window("May-June", "November-January"))]
            .into_iter()
            .collect(),
        fertilizer_schedule: Vec::new(),
        market: market(
            "₹5,500-6,000/quintal",
            Trend::Stable,
            "Market conditions favorable",
        ),
        agronomic_tips: Vec::new(),
        water_requirement: "700-1200 mm".to_string(),
        economics: CropEconomics {
            base_yield_t_ha: 2.1,
            price_per_kg: 5750.0,
            cost_per_hectare: 55000.0,
        },
        regional_averages: by_state(&[
            ("Gujarat", 18.0),
            ("Maharashtra", 16.0),
            ("Telangana", 17.0),
            ("Andhra Pradesh", 16.0),
            ("Karnataka", 15.0),
            ("Punjab", 19.0),
            ("Haryana", 18.0),
            ("Rajasthan", 14.0),
            ("Madhya Pradesh", 15.0),
            ("Tamil Nadu", 14.0),
        ]),
    }
}

fn sugarcane() -> CropProfile {
    CropProfile {
        yield_range: YieldRange {
            min: 650.0,
            max: 850.0,
            optimal: 750.0,
        },
        windows: [(
            Season::Kharif,
            window("February-March", "December-March (next year)"),
        )]
        .into_iter()
        .collect(),
        fertilizer_schedule: Vec::new(),
        market: market("₹280-320/quintal", Trend::Rising, "Good demand expected"),
        agronomic_tips: Vec::new(),
        water_requirement: "1800-2500 mm".to_string(),
        economics: CropEconomics {
            base_yield_t_ha: 75.0,
            price_per_kg: 300.0,
            cost_per_hectare: 80000.0,
        },
        regional_averages: by_state(&[
            ("Uttar Pradesh", 780.0),
            ("Maharashtra", 820.0),
            ("Karnataka", 850.0),
            ("Tamil Nadu", 890.0),
            ("Andhra Pradesh", 860.0),
            ("Telangana", 840.0),
            ("Gujarat", 800.0),
            ("Punjab", 760.0),
            ("Haryana", 770.0),
            ("Bihar", 720.0),
            ("West Bengal", 750.0),
        ]),
    }
}

fn regional_multipliers() -> BTreeMap<String, f64> {
    by_state(&[
        ("Punjab", 1.15),
        ("Haryana", 1.12),
        ("Uttar Pradesh", 1.05),
        ("Maharashtra", 1.08),
        ("Karnataka", 1.02),
        ("Tamil Nadu", 1.00),
        ("West Bengal", 1.10),
        ("Bihar", 0.95),
        ("Rajasthan", 0.90),
        ("Gujarat", 1.06),
        ("Andhra Pradesh", 1.03),
        ("Telangana", 1.01),
        ("Madhya Pradesh", 0.98),
        ("Odisha", 0.96),
    ])
}

fn pest_rule(
    crop: Crop,
    triggers: &[PestTrigger],
    pest: &str,
    risk: AlertLevel,
    prevention: &str,
    treatment: &str,
) -> PestRule {
    PestRule {
        crop,
        triggers: triggers.to_vec(),
        pest: pest.to_string(),
        risk,
        prevention: prevention.to_string(),
        treatment: treatment.to_string(),
    }
}

fn pest_rules() -> Vec<PestRule> {
    vec![
        pest_rule(
            Crop::Rice,
            &[PestTrigger::HumidityAbove(80.0)],
            "Brown Planthopper",
            AlertLevel::High,
            "Use resistant varieties and maintain proper plant spacing",
            "Apply neem oil or approved insecticides",
        ),
        pest_rule(
            Crop::Rice,
            &[PestTrigger::TemperatureAbove(30.0)],
            "Rice Blast",
            AlertLevel::Medium,
            "Ensure proper drainage and avoid excess nitrogen",
            "Apply fungicides at early symptoms",
        ),
        pest_rule(
            Crop::Wheat,
            &[
                PestTrigger::HumidityAbove(70.0),
                PestTrigger::TemperatureBelow(20.0),
            ],
            "Rust Disease",
            AlertLevel::High,
            "Use rust-resistant varieties",
            "Apply fungicides at tillering stage",
        ),
        pest_rule(
            Crop::Maize,
            &[PestTrigger::TemperatureAbove(32.0)],
            "Fall Armyworm",
            AlertLevel::Medium,
            "Regular monitoring and pheromone traps",
            "Early application of bio-pesticides",
        ),
        pest_rule(
            Crop::Cotton,
            &[PestTrigger::HumidityBelow(50.0)],
            "Bollworm",
            AlertLevel::High,
            "Use Bt cotton varieties and trap crops",
            "Integrated pest management approach",
        ),
        pest_rule(
            Crop::Sugarcane,
            &[PestTrigger::TemperatureAbove(35.0)],
            "Red Rot",
            AlertLevel::Medium,
            "Use disease-free setts and proper drainage",
            "Remove affected plants and apply fungicides",
        ),
    ]
}
