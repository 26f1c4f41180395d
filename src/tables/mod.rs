//! Reference data the engine scores against.
//!
//! Tables are built once (either the built-in set or a YAML override) and
//! only ever read afterwards.

mod builtin;

use crate::error::{CropwiseError, Result};
use crate::models::{AlertLevel, Crop, CropConditions, Season, Trend};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::OnceLock;

/// Base yield used when a crop has no profile (quintals/ha)
pub const DEFAULT_BASE_YIELD: f64 = 40.0;

/// Window text for crop/season combinations with no tabulated dates
pub const CONSULT_LOCAL_EXPERT: &str = "Consult local expert";

/// Yield range in quintals per hectare
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YieldRange {
    pub min: f64,
    pub max: f64,
    pub optimal: f64,
}

impl YieldRange {
    pub fn clamp(&self, value: f64) -> f64 {
        value.max(self.min).min(self.max)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowingWindow {
    pub planting: String,
    pub harvest: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketSnapshot {
    pub price: String,
    pub trend: Trend,
    pub recommendation: String,
}

impl MarketSnapshot {
    /// Placeholder for crops with no market data.
    pub fn unknown() -> Self {
        Self {
            price: "Contact local market".to_string(),
            trend: Trend::Stable,
            recommendation: "Monitor market conditions".to_string(),
        }
    }
}

/// Per-hectare figures used when comparing crops against each other.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CropEconomics {
    /// Quick yield estimate under neutral conditions (tonnes/ha)
    pub base_yield_t_ha: f64,
    /// Farm-gate price in rupees per kg
    pub price_per_kg: f64,
    /// Cultivation cost in rupees per hectare
    pub cost_per_hectare: f64,
}

impl Default for CropEconomics {
    fn default() -> Self {
        Self {
            base_yield_t_ha: 3.0,
            price_per_kg: 20.0,
            cost_per_hectare: 40000.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CropProfile {
    pub yield_range: YieldRange,
    #[serde(default)]
    pub windows: BTreeMap<Season, GrowingWindow>,
    #[serde(default)]
    pub fertilizer_schedule: Vec<String>,
    pub market: MarketSnapshot,
    #[serde(default)]
    pub agronomic_tips: Vec<String>,
    pub water_requirement: String,
    #[serde(default)]
    pub economics: CropEconomics,
    /// Typical yield by state (quintals/ha)
    #[serde(default)]
    pub regional_averages: BTreeMap<String, f64>,
}

/// Threshold on a single field condition. All triggers of a rule must hold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "when", content = "value", rename_all = "snake_case")]
pub enum PestTrigger {
    HumidityAbove(f64),
    HumidityBelow(f64),
    TemperatureAbove(f64),
    TemperatureBelow(f64),
}

impl PestTrigger {
    pub fn holds(&self, conditions: &CropConditions) -> bool {
        match *self {
            PestTrigger::HumidityAbove(v) => conditions.humidity_percent > v,
            PestTrigger::HumidityBelow(v) => conditions.humidity_percent < v,
            PestTrigger::TemperatureAbove(v) => conditions.temperature_c > v,
            PestTrigger::TemperatureBelow(v) => conditions.temperature_c < v,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PestRule {
    pub crop: Crop,
    pub triggers: Vec<PestTrigger>,
    pub pest: String,
    pub risk: AlertLevel,
    pub prevention: String,
    pub treatment: String,
}

impl PestRule {
    pub fn matches(&self, conditions: &CropConditions) -> bool {
        self.crop == conditions.crop && self.triggers.iter().all(|t| t.holds(conditions))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceTables {
    pub crops: BTreeMap<Crop, CropProfile>,
    /// Yield multiplier keyed by exact state name
    pub regional_multipliers: BTreeMap<String, f64>,
    pub pest_rules: Vec<PestRule>,
}

static BUILTIN: OnceLock<ReferenceTables> = OnceLock::new();

impl ReferenceTables {
    /// Built-in tables for the five supported crops and major Indian states.
    pub fn builtin() -> Self {
        builtin::tables()
    }

    /// Process-wide built-in tables, constructed on first use.
    pub fn shared() -> &'static ReferenceTables {
        BUILTIN.get_or_init(Self::builtin)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let tables: ReferenceTables = serde_yaml::from_str(content)?;
        tables.check()?;
        Ok(tables)
    }

    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CropwiseError::NotFound(format!(
                "reference tables at {}",
                path.display()
            )));
        }
        let content = std::fs::read_to_string(path)?;
        let tables = Self::from_yaml_str(&content)?;
        tracing::info!(
            "Loaded reference tables from {} ({} crops, {} regions, {} pest rules)",
            path.display(),
            tables.crops.len(),
            tables.regional_multipliers.len(),
            tables.pest_rules.len()
        );
        Ok(tables)
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn crop(&self, crop: &Crop) -> Option<&CropProfile> {
        self.crops.get(crop)
    }

    /// Case-sensitive exact match on the state name.
    pub fn regional_multiplier(&self, location: &str) -> Option<f64> {
        self.regional_multipliers.get(location).copied()
    }

    pub fn growing_window(&self, crop: &Crop, season: &Season) -> Option<&GrowingWindow> {
        self.crop(crop).and_then(|p| p.windows.get(season))
    }

    pub fn pest_rules_for<'a>(&'a self, crop: &'a Crop) -> impl Iterator<Item = &'a PestRule> {
        self.pest_rules.iter().filter(move |r| &r.crop == crop)
    }

    fn check(&self) -> Result<()> {
        for (crop, profile) in &self.crops {
            let range = profile.yield_range;
            let finite = range.min.is_finite() && range.max.is_finite() && range.optimal.is_finite();
            if !finite || range.min > range.optimal || range.optimal > range.max {
                return Err(CropwiseError::Config(format!(
                    "yield range for {} must satisfy min <= optimal <= max (got {}/{}/{})",
                    crop, range.min, range.optimal, range.max
                )));
            }
        }

        if let Some((region, m)) = self
            .regional_multipliers
            .iter()
            .find(|(_, m)| !m.is_finite() || **m <= 0.0)
        {
            return Err(CropwiseError::Config(format!(
                "regional multiplier for {} must be positive (got {})",
                region, m
            )));
        }

        Ok(())
    }
}

impl Default for ReferenceTables {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_covers_all_known_crops() {
        let tables = ReferenceTables::builtin();
        for crop in Crop::all() {
            assert!(tables.crop(crop).is_some(), "missing profile for {}", crop);
        }
        assert!(tables.crop(&Crop::from("Barley")).is_none());
    }

    #[test]
    fn rice_yield_range() {
        let range = ReferenceTables::shared()
            .crop(&Crop::Rice)
            .unwrap()
            .yield_range;
        assert_eq!(range.min, 42.0);
        assert_eq!(range.max, 58.0);
        assert_eq!(range.optimal, 50.0);
        assert_eq!(range.clamp(70.0), 58.0);
        assert_eq!(range.clamp(10.0), 42.0);
    }

    #[test]
    fn regional_multiplier_is_case_sensitive() {
        let tables = ReferenceTables::shared();
        assert_eq!(tables.regional_multiplier("Punjab"), Some(1.15));
        assert_eq!(tables.regional_multiplier("punjab"), None);
        assert_eq!(tables.regional_multiplier("Atlantis"), None);
    }

    #[test]
    fn wheat_has_only_rabi_window() {
        let tables = ReferenceTables::shared();
        let rabi = tables.growing_window(&Crop::Wheat, &Season::Rabi).unwrap();
        assert_eq!(rabi.planting, "November-December");
        assert_eq!(rabi.harvest, "March-April");
        assert!(tables.growing_window(&Crop::Wheat, &Season::Kharif).is_none());
    }

    #[test]
    fn pest_trigger_thresholds_are_strict() {
        let conditions = CropConditions::new(Crop::Rice, "Punjab", Season::Kharif)
            .with_humidity(80.0)
            .with_temperature(30.0);
        assert!(!PestTrigger::HumidityAbove(80.0).holds(&conditions));
        assert!(!PestTrigger::TemperatureAbove(30.0).holds(&conditions));
        assert!(PestTrigger::HumidityBelow(80.1).holds(&conditions));
    }

    #[test]
    fn yaml_round_trip_preserves_tables() {
        let tables = ReferenceTables::builtin();
        let yaml = tables.to_yaml().unwrap();
        let loaded = ReferenceTables::from_yaml_str(&yaml).unwrap();
        assert_eq!(loaded, tables);
    }

    #[test]
    fn inverted_yield_range_is_rejected() {
        let mut tables = ReferenceTables::builtin();
        if let Some(profile) = tables.crops.get_mut(&Crop::Rice) {
            profile.yield_range.min = 60.0;
        }
        let yaml = tables.to_yaml().unwrap();
        assert!(matches!(
            ReferenceTables::from_yaml_str(&yaml),
            Err(CropwiseError::Config(_))
        ));
    }

    #[test]
    fn missing_tables_file_is_not_found() {
        let result = ReferenceTables::from_yaml_file(Path::new("/nonexistent/tables.yaml"));
        assert!(matches!(result, Err(CropwiseError::NotFound(_))));
    }
}
