//! Crop yield prediction and farming advisory engine.
//!
//! The engine is pure and synchronous: both entry points take a
//! [`CropConditions`] record and return a fresh result. Randomness is
//! injected so a seeded generator reproduces a prediction exactly.

pub mod config;
pub mod error;
pub mod logic;
pub mod models;
pub mod report;
pub mod tables;

pub use error::{CropwiseError, Result};
pub use logic::{Advisor, Predictor};
pub use models::{
    Crop, CropConditions, FarmingAdvisory, PredictionResult, RiskLevel, Season,
};
pub use tables::ReferenceTables;

use rand::Rng;

/// Predict yield against the built-in reference tables.
pub fn predict<R: Rng + ?Sized>(conditions: &CropConditions, rng: &mut R) -> Result<PredictionResult> {
    Predictor::new(ReferenceTables::shared()).predict(conditions, rng)
}

/// Build a farming advisory against the built-in reference tables.
pub fn advise(conditions: &CropConditions) -> Result<FarmingAdvisory> {
    Advisor::new(ReferenceTables::shared()).advise(conditions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn free_functions_use_builtin_tables() {
        let conditions = CropConditions::new(Crop::Maize, "Karnataka", Season::Kharif);
        let a = predict(&conditions, &mut ChaCha8Rng::seed_from_u64(7)).unwrap();
        let b = Predictor::new(&ReferenceTables::builtin())
            .predict(&conditions, &mut ChaCha8Rng::seed_from_u64(7))
            .unwrap();
        assert_eq!(a, b);

        let advisory = advise(&conditions).unwrap();
        assert_eq!(advisory.planting_date, "June-July");
    }

    #[test]
    fn form_json_round_trips_into_a_prediction() {
        let json = r#"{
            "cropType": "rice",
            "location": "Punjab",
            "season": "Kharif (Monsoon)",
            "rainfall": 1100,
            "temperature": 25,
            "humidity": 70,
            "soilPh": 6.8,
            "area": 2.5
        }"#;
        let conditions: CropConditions = serde_json::from_str(json).unwrap();
        assert_eq!(conditions.crop, Crop::Rice);
        assert_eq!(conditions.season, Season::Kharif);

        let result = predict(&conditions, &mut ChaCha8Rng::seed_from_u64(1)).unwrap();
        assert!((42.0..=58.0).contains(&result.yield_per_hectare));
    }
}
