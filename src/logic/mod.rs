pub mod advisory;
pub mod analysis;
pub mod assessment;
pub mod calculations;
pub mod ensemble;
pub mod predictor;
pub mod rules;
pub mod scoring;

pub use advisory::Advisor;
pub use predictor::Predictor;
pub use rules::RulesEngine;
