use super::recommendation::Recommendation;
use serde::{Deserialize, Serialize};

/// Weather and soil quality multipliers derived from field conditions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentalScores {
    /// Clamped to 0.70-1.30
    pub weather: f64,
    pub soil: f64,
}

impl EnvironmentalScores {
    pub fn new(weather: f64, soil: f64) -> Self {
        Self { weather, soil }
    }

    pub fn overall(&self) -> f64 {
        (self.weather + self.soil) / 2.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Moderate => "Moderate",
            RiskLevel::High => "High",
        }
    }

    pub fn color(&self) -> RiskColor {
        match self {
            RiskLevel::Low => RiskColor::Success,
            RiskLevel::Moderate => RiskColor::Warning,
            RiskLevel::High => RiskColor::Destructive,
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Display tone paired with a [`RiskLevel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskColor {
    Success,
    Warning,
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// Quintals per hectare, one decimal
    pub yield_per_hectare: f64,
    /// Quintals, one decimal
    pub total_production: f64,
    /// Percentage in 75..=95
    pub confidence: u8,
    pub risk_level: RiskLevel,
    pub risk_color: RiskColor,
    /// Weather score as a percentage
    pub weather_score: u32,
    /// Soil score as a percentage
    pub soil_score: u32,
    pub recommendations: Vec<Recommendation>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn risk_color_matches_level() {
        assert_eq!(RiskLevel::Low.color(), RiskColor::Success);
        assert_eq!(RiskLevel::Moderate.color(), RiskColor::Warning);
        assert_eq!(RiskLevel::High.color(), RiskColor::Destructive);
    }

    #[test]
    fn overall_score_is_mean() {
        let scores = EnvironmentalScores::new(1.1, 0.9);
        assert!((scores.overall() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn risk_level_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&RiskLevel::Moderate).unwrap(),
            "\"moderate\""
        );
    }
}
