use crate::models::SoilAdvice;

fn advice(condition: &str, advice: &str, fertilizer: &str, timing: &str) -> SoilAdvice {
    SoilAdvice {
        condition: condition.to_string(),
        advice: advice.to_string(),
        fertilizer: fertilizer.to_string(),
        timing: timing.to_string(),
    }
}

/// Select the single soil recommendation for a pH reading.
pub fn advise(ph: f64) -> SoilAdvice {
    if ph < 6.0 {
        advice(
            "Acidic soil detected",
            "Apply lime to increase soil pH",
            "Use alkaline fertilizers like wood ash",
            "Apply 2-3 weeks before planting",
        )
    } else if ph > 8.0 {
        advice(
            "Alkaline soil detected",
            "Add organic matter and sulfur",
            "Use acidic fertilizers like ammonium sulfate",
            "Apply during land preparation",
        )
    } else {
        advice(
            "Optimal soil pH",
            "Maintain current soil conditions",
            "Standard NPK fertilizers recommended",
            "Follow crop-specific schedule",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ph_bands() {
        assert_eq!(advise(5.9).condition, "Acidic soil detected");
        assert_eq!(advise(6.0).condition, "Optimal soil pH");
        assert_eq!(advise(8.0).condition, "Optimal soil pH");
        assert_eq!(advise(8.1).condition, "Alkaline soil detected");
    }

    #[test]
    fn acidic_advice_uses_lime() {
        let soil = advise(5.0);
        assert_eq!(soil.advice, "Apply lime to increase soil pH");
        assert_eq!(soil.timing, "Apply 2-3 weeks before planting");
    }
}
