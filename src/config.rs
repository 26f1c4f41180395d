use crate::error::{CropwiseError, Result};
use crate::logic::analysis::DEFAULT_HISTORY_YEARS;
use crate::models::{Crop, CropConditions, Season};
use crate::tables::ReferenceTables;
use dialoguer::{Input, Select};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EngineConfig {
    /// Fixed seed for reproducible runs; entropy when unset
    #[serde(default)]
    pub seed: Option<u64>,
    /// Reference tables YAML replacing the built-in set
    #[serde(default)]
    pub tables: Option<PathBuf>,
    #[serde(default = "default_history_years")]
    pub history_years: usize,
}

fn default_history_years() -> usize {
    DEFAULT_HISTORY_YEARS
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: None,
            tables: None,
            history_years: DEFAULT_HISTORY_YEARS,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

/// Fallbacks for condition fields not given on the command line.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DefaultsConfig {
    #[serde(default = "default_location")]
    pub location: String,
    #[serde(default = "default_season")]
    pub season: Season,
    #[serde(default = "default_area", alias = "area")]
    pub area_hectares: f64,
}

fn default_location() -> String {
    "Punjab".into()
}

fn default_season() -> Season {
    Season::Kharif
}

fn default_area() -> f64 {
    1.0
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            location: default_location(),
            season: default_season(),
            area_hectares: default_area(),
        }
    }
}

impl Config {
    /// Load configuration. An explicit path must exist; otherwise a missing
    /// file means built-in defaults.
    pub fn load(config_override: Option<&Path>) -> Result<Self> {
        let config_path = match config_override {
            Some(p) if !p.exists() => {
                return Err(CropwiseError::Config(format!(
                    "Config file not found at {:?}",
                    p
                )));
            }
            Some(p) => p.to_path_buf(),
            None => match Self::find_config_path() {
                Some(p) => p,
                None => {
                    tracing::debug!("No config file found, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        let config_str = std::fs::read_to_string(&config_path)
            .map_err(|e| CropwiseError::Config(format!("Failed to read config: {}", e)))?;
        let config = Self::from_yaml_str(&config_str)?;
        tracing::info!("Loaded config from {}", config_path.display());
        Ok(config)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let content = Self::substitute_env_vars(content)?;
        let config: Config = serde_yaml::from_str(&content)
            .map_err(|e| CropwiseError::Config(format!("Failed to parse config: {}", e)))?;
        config.check()?;
        Ok(config)
    }

    fn check(&self) -> Result<()> {
        if !self.defaults.area_hectares.is_finite() || self.defaults.area_hectares <= 0.0 {
            return Err(CropwiseError::Config(format!(
                "defaults.area must be positive (got {})",
                self.defaults.area_hectares
            )));
        }
        Ok(())
    }

    /// Reference tables named by `engine.tables`, or the built-in set.
    pub fn reference_tables(&self) -> Result<ReferenceTables> {
        match &self.engine.tables {
            Some(path) => ReferenceTables::from_yaml_file(path),
            None => Ok(ReferenceTables::builtin()),
        }
    }

    /// Search for config.yaml in standard locations.
    fn find_config_path() -> Option<PathBuf> {
        let local_config = PathBuf::from("config/config.yaml");
        if local_config.exists() {
            return Some(local_config);
        }

        dirs::config_dir()
            .map(|dir| dir.join("cropwise").join("config.yaml"))
            .filter(|p| p.exists())
    }

    /// Default path for writing new config files (~/.config/cropwise/config.yaml).
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| CropwiseError::Config("Cannot determine config directory".into()))?
            .join("cropwise");
        Ok(config_dir.join("config.yaml"))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let yaml = serde_yaml::to_string(self)?;
        let content = format!(
            "# Cropwise Configuration\n# Generated by `cropwise init`\n# Environment variable substitution (${{VAR}}) is supported.\n\n{}",
            yaml
        );
        std::fs::write(path, content)?;
        Ok(())
    }

    fn substitute_env_vars(content: &str) -> Result<String> {
        let mut result = content.to_string();

        let re = regex_lite::Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
            .map_err(|e| CropwiseError::Config(format!("Invalid substitution pattern: {}", e)))?;

        for cap in re.captures_iter(content) {
            let var_name = &cap[1];
            let placeholder = &cap[0];
            if let Ok(value) = std::env::var(var_name) {
                result = result.replace(placeholder, &value);
            }
        }

        Ok(result)
    }
}

fn prompt_err(e: dialoguer::Error) -> CropwiseError {
    CropwiseError::Config(format!("Input error: {}", e))
}

fn prompt_f64(prompt: &str, default: f64) -> Result<f64> {
    Input::new()
        .with_prompt(prompt)
        .default(default)
        .interact_text()
        .map_err(prompt_err)
}

/// Ask for a full conditions record, seeded from the configured defaults.
pub fn prompt_conditions(defaults: &DefaultsConfig) -> Result<CropConditions> {
    println!();
    println!("Field conditions");

    let crops = Crop::all();
    let crop_names: Vec<&str> = crops.iter().map(|c| c.name()).collect();
    let crop_idx = Select::new()
        .with_prompt("  Crop")
        .items(&crop_names[..])
        .default(0)
        .interact()
        .map_err(prompt_err)?;

    let location: String = Input::new()
        .with_prompt("  State")
        .default(defaults.location.clone())
        .interact_text()
        .map_err(prompt_err)?;

    let seasons = Season::all();
    let season_default = seasons
        .iter()
        .position(|s| *s == defaults.season)
        .unwrap_or(0);
    let season_names: Vec<&str> = seasons.iter().map(|s| s.display_name()).collect();
    let season_idx = Select::new()
        .with_prompt("  Season")
        .items(&season_names[..])
        .default(season_default)
        .interact()
        .map_err(prompt_err)?;

    println!();
    println!("Weather and soil");
    let rainfall = prompt_f64("  Annual rainfall (mm)", 1000.0)?;
    let temperature = prompt_f64("  Mean temperature (°C)", 25.0)?;
    let humidity = prompt_f64("  Humidity (%)", 70.0)?;
    let soil_ph = prompt_f64("  Soil pH", 6.8)?;
    let area = prompt_f64("  Area (hectares)", defaults.area_hectares)?;
    println!();

    let conditions = CropConditions::new(crops[crop_idx].clone(), location, seasons[season_idx].clone())
        .with_rainfall(rainfall)
        .with_temperature(temperature)
        .with_humidity(humidity)
        .with_soil_ph(soil_ph)
        .with_area(area);
    conditions.validate()?;
    Ok(conditions)
}
