use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertLevel {
    Low,
    Medium,
    High,
}

impl AlertLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertLevel::Low => "Low",
            AlertLevel::Medium => "Medium",
            AlertLevel::High => "High",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            AlertLevel::Low => "→",
            AlertLevel::Medium => "⚠",
            AlertLevel::High => "!",
        }
    }
}

impl std::fmt::Display for AlertLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeatherHazard {
    #[serde(rename = "Drought Risk")]
    Drought,
    #[serde(rename = "Excess Water")]
    ExcessWater,
    #[serde(rename = "Heat Stress")]
    HeatStress,
}

impl WeatherHazard {
    pub fn as_str(&self) -> &'static str {
        match self {
            WeatherHazard::Drought => "Drought Risk",
            WeatherHazard::ExcessWater => "Excess Water",
            WeatherHazard::HeatStress => "Heat Stress",
        }
    }
}

impl std::fmt::Display for WeatherHazard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherRisk {
    pub level: AlertLevel,
    #[serde(rename = "type")]
    pub hazard: WeatherHazard,
    pub description: String,
    pub recommendation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoilAdvice {
    pub condition: String,
    pub advice: String,
    pub fertilizer: String,
    pub timing: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PestRisk {
    pub pest: String,
    pub risk: AlertLevel,
    pub prevention: String,
    pub treatment: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Rising,
    Falling,
    #[default]
    Stable,
}

impl Trend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Trend::Rising => "↑ Rising",
            Trend::Falling => "↓ Falling",
            Trend::Stable => "→ Stable",
        }
    }
}

impl std::fmt::Display for Trend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketInsight {
    pub current_price: String,
    pub trend: Trend,
    pub recommendation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FarmingAdvisory {
    pub recommendations: Vec<String>,
    pub weather_risks: Vec<WeatherRisk>,
    pub soil_advice: SoilAdvice,
    pub pest_risks: Vec<PestRisk>,
    pub planting_date: String,
    pub harvest_date: String,
    pub irrigation_schedule: Vec<String>,
    pub fertilizer_schedule: Vec<String>,
    pub market_insights: MarketInsight,
    pub insurance_advice: String,
}

impl FarmingAdvisory {
    /// Highest weather risk level, `Low` when no weather risk was raised.
    pub fn overall_risk(&self) -> AlertLevel {
        self.weather_risks
            .iter()
            .map(|r| r.level)
            .max()
            .unwrap_or(AlertLevel::Low)
    }

    pub fn has_high_weather_risk(&self) -> bool {
        self.weather_risks.iter().any(|r| r.level == AlertLevel::High)
    }
}
