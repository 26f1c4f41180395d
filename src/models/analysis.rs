use super::advisory::AlertLevel;
use super::conditions::{Crop, Season};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub year: i32,
    #[serde(rename = "yield")]
    pub yield_per_hectare: f64,
    pub predicted: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FactorStatus {
    Good,
    Moderate,
    Poor,
}

impl FactorStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FactorStatus::Good => "Good",
            FactorStatus::Moderate => "Moderate",
            FactorStatus::Poor => "Poor",
        }
    }
}

impl std::fmt::Display for FactorStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactorImpact {
    pub factor: String,
    /// Relative impact on a 0-100 scale
    pub impact: u32,
    pub status: FactorStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Standing {
    Above,
    Below,
    Similar,
}

impl Standing {
    pub fn as_str(&self) -> &'static str {
        match self {
            Standing::Above => "Above Average",
            Standing::Below => "Below Average",
            Standing::Similar => "Similar to Average",
        }
    }
}

impl std::fmt::Display for Standing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionalComparison {
    pub location: String,
    pub regional_average: f64,
    pub predicted_yield: f64,
    pub difference: f64,
    pub percentage_difference: f64,
    pub standing: Standing,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CropComparison {
    pub crop: Crop,
    /// Quick estimate in tonnes per hectare
    pub predicted_yield: f64,
    /// Estimated profit per hectare in rupees
    pub profitability: i64,
    pub risk_level: AlertLevel,
    pub water_requirement: String,
    pub market_price: String,
    pub season: Season,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trend_point_uses_yield_key() {
        let point = TrendPoint {
            year: 2026,
            yield_per_hectare: 51.2,
            predicted: true,
        };
        let json = serde_json::to_value(&point).unwrap();
        assert_eq!(json["yield"], 51.2);
        assert_eq!(json["predicted"], true);
    }

    #[test]
    fn standing_labels() {
        assert_eq!(Standing::Above.to_string(), "Above Average");
        assert_eq!(Standing::Similar.to_string(), "Similar to Average");
        let json = serde_json::to_value(Standing::Below).unwrap();
        assert_eq!(json, "below");
    }
}
