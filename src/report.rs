//! Combined field report and plain-text rendering for the CLI.

use crate::error::Result;
use crate::logic::{analysis, Advisor, Predictor};
use crate::models::{
    CropComparison, CropConditions, FactorImpact, FarmingAdvisory, PredictionResult,
    RegionalComparison, TrendPoint,
};
use crate::tables::ReferenceTables;
use rand::Rng;
use serde::Serialize;
use std::fmt::Write;

/// Prediction, advisory and supporting analysis for one set of conditions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub conditions: CropConditions,
    pub prediction: PredictionResult,
    pub advisory: FarmingAdvisory,
    pub historical_trend: Vec<TrendPoint>,
    pub factors: Vec<FactorImpact>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regional: Option<RegionalComparison>,
}

impl Report {
    /// The prediction draws from `rng` first, then the trend history.
    pub fn build<R: Rng + ?Sized>(
        tables: &ReferenceTables,
        conditions: &CropConditions,
        rng: &mut R,
        current_year: i32,
        history_years: usize,
    ) -> Result<Self> {
        let prediction = Predictor::new(tables).predict(conditions, rng)?;
        let advisory = Advisor::new(tables).advise(conditions)?;
        let scores = Predictor::scores(conditions);

        Ok(Self {
            historical_trend: analysis::historical_trend(
                prediction.yield_per_hectare,
                history_years,
                current_year,
                rng,
            ),
            factors: analysis::factor_analysis(conditions, &scores),
            regional: analysis::compare_to_region(
                tables,
                &conditions.crop,
                &conditions.location,
                prediction.yield_per_hectare,
            ),
            conditions: conditions.clone(),
            prediction,
            advisory,
        })
    }
}

// Writes into a String are infallible, so results are discarded throughout.

fn heading(out: &mut String, title: &str) {
    let _ = writeln!(out, "\n{}", title);
    let _ = writeln!(out, "{}", "─".repeat(title.chars().count()));
}

fn bullets(out: &mut String, items: &[String]) {
    for item in items {
        let _ = writeln!(out, "  • {}", item);
    }
}

pub fn render_conditions(conditions: &CropConditions) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} in {}, {} | {} ha",
        conditions.crop, conditions.location, conditions.season, conditions.area_hectares
    );
    let _ = writeln!(
        out,
        "Rainfall {} mm, {} °C, humidity {}%, soil pH {}",
        conditions.rainfall_mm,
        conditions.temperature_c,
        conditions.humidity_percent,
        conditions.soil_ph
    );
    out
}

pub fn render_prediction(result: &PredictionResult) -> String {
    let mut out = String::new();
    heading(&mut out, "Yield Prediction");
    let _ = writeln!(out, "  Yield:        {} q/ha", result.yield_per_hectare);
    let _ = writeln!(out, "  Production:   {} q", result.total_production);
    let _ = writeln!(out, "  Confidence:   {}%", result.confidence);
    let _ = writeln!(out, "  Risk:         {}", result.risk_level.as_str());
    let _ = writeln!(
        out,
        "  Weather:      {}%   Soil: {}%",
        result.weather_score, result.soil_score
    );

    if !result.recommendations.is_empty() {
        heading(&mut out, "Recommendations");
        for rec in &result.recommendations {
            let _ = writeln!(out, "  {} {}", rec.kind.symbol(), rec.title);
            let _ = writeln!(out, "    {}", rec.text);
            for dp in &rec.data_points {
                let _ = writeln!(out, "    - {}: {} ({})", dp.label, dp.value, dp.source);
            }
        }
    }
    out
}

pub fn render_advisory(advisory: &FarmingAdvisory) -> String {
    let mut out = String::new();

    heading(&mut out, "Weather Risks");
    if advisory.weather_risks.is_empty() {
        let _ = writeln!(out, "  No significant weather risks");
    }
    for risk in &advisory.weather_risks {
        let _ = writeln!(
            out,
            "  {} {} [{}]: {}",
            risk.level.symbol(),
            risk.hazard,
            risk.level,
            risk.description
        );
        let _ = writeln!(out, "    {}", risk.recommendation);
    }

    heading(&mut out, "Soil");
    let soil = &advisory.soil_advice;
    let _ = writeln!(out, "  {}: {}", soil.condition, soil.advice);
    let _ = writeln!(out, "  Fertilizer: {} ({})", soil.fertilizer, soil.timing);

    if !advisory.pest_risks.is_empty() {
        heading(&mut out, "Pest Risks");
        for pest in &advisory.pest_risks {
            let _ = writeln!(out, "  {} {} [{}]", pest.risk.symbol(), pest.pest, pest.risk);
            let _ = writeln!(out, "    Prevention: {}", pest.prevention);
            let _ = writeln!(out, "    Treatment:  {}", pest.treatment);
        }
    }

    heading(&mut out, "Calendar");
    let _ = writeln!(out, "  Planting: {}", advisory.planting_date);
    let _ = writeln!(out, "  Harvest:  {}", advisory.harvest_date);

    heading(&mut out, "Irrigation");
    bullets(&mut out, &advisory.irrigation_schedule);

    heading(&mut out, "Fertilizer");
    bullets(&mut out, &advisory.fertilizer_schedule);

    heading(&mut out, "Market");
    let market = &advisory.market_insights;
    let _ = writeln!(out, "  {} {}", market.current_price, market.trend);
    let _ = writeln!(out, "  {}", market.recommendation);

    heading(&mut out, "Insurance");
    let _ = writeln!(out, "  {}", advisory.insurance_advice);

    heading(&mut out, "General");
    bullets(&mut out, &advisory.recommendations);

    let _ = writeln!(out, "\nOverall risk: {}", advisory.overall_risk());
    out
}

pub fn render_report(report: &Report) -> String {
    let mut out = render_conditions(&report.conditions);
    out.push_str(&render_prediction(&report.prediction));

    heading(&mut out, "Yield Trend");
    for point in &report.historical_trend {
        let marker = if point.predicted { " (predicted)" } else { "" };
        let _ = writeln!(out, "  {}  {:>7.1}{}", point.year, point.yield_per_hectare, marker);
    }

    heading(&mut out, "Factors");
    for f in &report.factors {
        let _ = writeln!(out, "  {:<12} {:>3}  {}", f.factor, f.impact, f.status);
    }

    if let Some(regional) = &report.regional {
        heading(&mut out, "Regional Comparison");
        let _ = writeln!(
            out,
            "  {} average {} q/ha, predicted {} q/ha",
            regional.location, regional.regional_average, regional.predicted_yield
        );
        let _ = writeln!(
            out,
            "  {:+} q/ha ({:+}%) {}",
            regional.difference, regional.percentage_difference, regional.standing
        );
    }

    out.push_str(&render_advisory(&report.advisory));
    out
}

pub fn render_comparison(comparisons: &[CropComparison]) -> String {
    let mut out = String::new();
    heading(&mut out, "Crop Comparison");
    let _ = writeln!(
        out,
        "  {:<10} {:>8} {:>12} {:<7} {:<14} {}",
        "Crop", "t/ha", "Profit ₹/ha", "Risk", "Water", "Price"
    );
    for c in comparisons {
        let _ = writeln!(
            out,
            "  {:<10} {:>8.2} {:>12} {:<7} {:<14} {}",
            c.crop.name(),
            c.predicted_yield,
            c.profitability,
            c.risk_level.as_str(),
            c.water_requirement,
            c.market_price
        );
    }

    if let Some(best) = analysis::best_option(comparisons) {
        let _ = writeln!(
            out,
            "\nMost profitable: {} (₹{}/ha)",
            best.crop, best.profitability
        );
    }
    out
}
