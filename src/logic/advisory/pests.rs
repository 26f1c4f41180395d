use crate::models::{CropConditions, PestRisk};
use crate::tables::ReferenceTables;

/// Pest and disease risks whose crop and weather triggers all match, in
/// table order.
pub fn assess(tables: &ReferenceTables, conditions: &CropConditions) -> Vec<PestRisk> {
    tables
        .pest_rules_for(&conditions.crop)
        .filter(|rule| rule.matches(conditions))
        .map(|rule| PestRisk {
            pest: rule.pest.clone(),
            risk: rule.risk,
            prevention: rule.prevention.clone(),
            treatment: rule.treatment.clone(),
        })
        .collect()
}
