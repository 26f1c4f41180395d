use crate::error::{CropwiseError, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Crop {
    Rice,
    Wheat,
    Maize,
    Cotton,
    Sugarcane,
    Other(String),
}

impl Crop {
    pub fn name(&self) -> &str {
        match self {
            Crop::Rice => "Rice",
            Crop::Wheat => "Wheat",
            Crop::Maize => "Maize",
            Crop::Cotton => "Cotton",
            Crop::Sugarcane => "Sugarcane",
            Crop::Other(name) => name,
        }
    }

    /// Parses one of the tabulated crops, ignoring case.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "rice" | "paddy" => Some(Crop::Rice),
            "wheat" => Some(Crop::Wheat),
            "maize" | "corn" => Some(Crop::Maize),
            "cotton" => Some(Crop::Cotton),
            "sugarcane" => Some(Crop::Sugarcane),
            _ => None,
        }
    }

    pub fn all() -> &'static [Crop] {
        &[
            Crop::Rice,
            Crop::Wheat,
            Crop::Maize,
            Crop::Cotton,
            Crop::Sugarcane,
        ]
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Crop::Other(_))
    }
}

impl From<&str> for Crop {
    fn from(s: &str) -> Self {
        Crop::from_str(s).unwrap_or_else(|| Crop::Other(s.trim().to_string()))
    }
}

impl From<String> for Crop {
    fn from(s: String) -> Self {
        Crop::from(s.as_str())
    }
}

impl From<Crop> for String {
    fn from(crop: Crop) -> Self {
        crop.name().to_string()
    }
}

impl std::fmt::Display for Crop {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Indian cropping season.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Season {
    /// Monsoon crop, sown June-July
    Kharif,
    /// Winter crop, sown November-December
    Rabi,
    /// Summer crop between Rabi harvest and Kharif sowing
    Zaid,
    Other(String),
}

impl Season {
    pub fn as_str(&self) -> &str {
        match self {
            Season::Kharif => "Kharif",
            Season::Rabi => "Rabi",
            Season::Zaid => "Zaid",
            Season::Other(name) => name,
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            Season::Kharif => "Kharif (Monsoon)",
            Season::Rabi => "Rabi (Winter)",
            Season::Zaid => "Zaid (Summer)",
            Season::Other(name) => name,
        }
    }

    /// Accepts both the short name and the long form used by input forms.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "kharif" | "kharif (monsoon)" | "monsoon" => Some(Season::Kharif),
            "rabi" | "rabi (winter)" | "winter" => Some(Season::Rabi),
            "zaid" | "zaid (summer)" | "summer" => Some(Season::Zaid),
            _ => None,
        }
    }

    pub fn all() -> &'static [Season] {
        &[Season::Kharif, Season::Rabi, Season::Zaid]
    }
}

impl From<&str> for Season {
    fn from(s: &str) -> Self {
        Season::from_str(s).unwrap_or_else(|| Season::Other(s.trim().to_string()))
    }
}

impl From<String> for Season {
    fn from(s: String) -> Self {
        Season::from(s.as_str())
    }
}

impl From<Season> for String {
    fn from(season: Season) -> Self {
        season.as_str().to_string()
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Field conditions supplied by the caller for a single prediction or advisory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CropConditions {
    #[serde(alias = "cropType")]
    pub crop: Crop,
    pub location: String,
    pub season: Season,
    /// Annual rainfall in mm
    #[serde(alias = "rainfall")]
    pub rainfall_mm: f64,
    /// Mean temperature in °C
    #[serde(alias = "temperature")]
    pub temperature_c: f64,
    #[serde(alias = "humidity")]
    pub humidity_percent: f64,
    #[serde(alias = "soilPh")]
    pub soil_ph: f64,
    /// Cultivated area in hectares
    #[serde(alias = "area")]
    pub area_hectares: f64,
}

impl CropConditions {
    pub fn new(crop: impl Into<Crop>, location: impl Into<String>, season: impl Into<Season>) -> Self {
        Self {
            crop: crop.into(),
            location: location.into(),
            season: season.into(),
            rainfall_mm: 1000.0,
            temperature_c: 25.0,
            humidity_percent: 70.0,
            soil_ph: 6.8,
            area_hectares: 1.0,
        }
    }

    pub fn with_rainfall(mut self, mm: f64) -> Self {
        self.rainfall_mm = mm;
        self
    }

    pub fn with_temperature(mut self, celsius: f64) -> Self {
        self.temperature_c = celsius;
        self
    }

    pub fn with_humidity(mut self, percent: f64) -> Self {
        self.humidity_percent = percent;
        self
    }

    pub fn with_soil_ph(mut self, ph: f64) -> Self {
        self.soil_ph = ph;
        self
    }

    pub fn with_area(mut self, hectares: f64) -> Self {
        self.area_hectares = hectares;
        self
    }

    /// Rejects numeric values the scoring curves are not defined for.
    ///
    /// Categorical fields are never rejected: unknown crops, seasons and
    /// locations fall back to defaults further down the pipeline.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("rainfall", self.rainfall_mm),
            ("temperature", self.temperature_c),
            ("humidity", self.humidity_percent),
            ("soil pH", self.soil_ph),
            ("area", self.area_hectares),
        ];

        for (name, value) in fields {
            if !value.is_finite() {
                return Err(CropwiseError::InvalidInput(format!(
                    "{} must be a finite number (got {})",
                    name, value
                )));
            }
        }

        if self.rainfall_mm < 0.0 {
            return Err(CropwiseError::InvalidInput(format!(
                "rainfall cannot be negative (got {} mm)",
                self.rainfall_mm
            )));
        }

        if !(0.0..=100.0).contains(&self.humidity_percent) {
            return Err(CropwiseError::InvalidInput(format!(
                "humidity must be between 0 and 100% (got {})",
                self.humidity_percent
            )));
        }

        if !(0.0..=14.0).contains(&self.soil_ph) {
            return Err(CropwiseError::InvalidInput(format!(
                "soil pH must be between 0 and 14 (got {})",
                self.soil_ph
            )));
        }

        if self.area_hectares <= 0.0 {
            return Err(CropwiseError::InvalidInput(format!(
                "area must be greater than zero (got {} ha)",
                self.area_hectares
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> CropConditions {
        CropConditions::new(Crop::Rice, "Punjab", Season::Kharif)
    }

    #[test]
    fn crop_from_str_valid() {
        assert_eq!(Crop::from_str("Rice"), Some(Crop::Rice));
        assert_eq!(Crop::from_str("rice"), Some(Crop::Rice));
        assert_eq!(Crop::from_str("  WHEAT "), Some(Crop::Wheat));
        assert_eq!(Crop::from_str("corn"), Some(Crop::Maize));
        assert_eq!(Crop::from_str("Sugarcane"), Some(Crop::Sugarcane));
    }

    #[test]
    fn crop_from_str_invalid() {
        assert_eq!(Crop::from_str("Barley"), None);
        assert_eq!(Crop::from_str(""), None);
    }

    #[test]
    fn unknown_crop_is_kept_by_name() {
        let crop = Crop::from("Barley");
        assert_eq!(crop, Crop::Other("Barley".to_string()));
        assert_eq!(crop.name(), "Barley");
        assert!(!crop.is_known());
    }

    #[test]
    fn crop_round_trip() {
        for crop in Crop::all() {
            assert_eq!(Crop::from(crop.name()), *crop, "Round-trip failed for {:?}", crop);
        }
    }

    #[test]
    fn season_accepts_long_names() {
        assert_eq!(Season::from_str("Kharif"), Some(Season::Kharif));
        assert_eq!(Season::from_str("Kharif (Monsoon)"), Some(Season::Kharif));
        assert_eq!(Season::from_str("rabi (winter)"), Some(Season::Rabi));
        assert_eq!(Season::from_str("Zaid (Summer)"), Some(Season::Zaid));
        assert_eq!(Season::from("Autumn"), Season::Other("Autumn".to_string()));
    }

    #[test]
    fn conditions_deserialize_from_form_json() {
        let json = r#"{
            "cropType": "Wheat",
            "location": "Punjab",
            "season": "Rabi (Winter)",
            "rainfall": 500,
            "temperature": 19,
            "humidity": 65,
            "soilPh": 7.0,
            "area": 10
        }"#;

        let conditions: CropConditions = serde_json::from_str(json).unwrap();
        assert_eq!(conditions.crop, Crop::Wheat);
        assert_eq!(conditions.season, Season::Rabi);
        assert_eq!(conditions.rainfall_mm, 500.0);
        assert_eq!(conditions.area_hectares, 10.0);
    }

    #[test]
    fn valid_conditions_pass() {
        assert!(valid().validate().is_ok());
        assert!(valid().with_rainfall(0.0).validate().is_ok());
        assert!(valid().with_soil_ph(14.0).validate().is_ok());
        assert!(valid().with_temperature(-5.0).validate().is_ok());
    }

    #[test]
    fn invalid_numbers_are_rejected() {
        let cases = [
            valid().with_rainfall(f64::NAN),
            valid().with_rainfall(-1.0),
            valid().with_temperature(f64::INFINITY),
            valid().with_humidity(101.0),
            valid().with_soil_ph(15.0),
            valid().with_soil_ph(-0.1),
            valid().with_area(0.0),
            valid().with_area(-2.0),
        ];

        for conditions in cases {
            assert!(
                matches!(conditions.validate(), Err(CropwiseError::InvalidInput(_))),
                "expected rejection for {:?}",
                conditions
            );
        }
    }
}
