use clap::{Args, Parser, Subcommand};
use cropwise::config::OutputFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "cropwise",
    version,
    about = "Crop yield prediction and farming advisory"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config.yaml
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Fixed random seed for reproducible output
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Output format (overrides config)
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Predict yield, confidence and risk
    Predict(ConditionsArgs),
    /// Farming advisory: weather, soil, pests, schedules, market, insurance
    Advise(ConditionsArgs),
    /// Prediction, advisory and yield analysis together
    Report(ConditionsArgs),
    /// Compare 2-4 crops under the same conditions
    Compare {
        /// Comma-separated crop names
        #[arg(long, value_delimiter = ',', required = true)]
        crops: Vec<String>,

        #[command(flatten)]
        conditions: ConditionsArgs,
    },
    /// Print the reference tables as YAML
    Tables,
    /// Interactively write a conditions file
    Init {
        /// Where to write the conditions YAML
        #[arg(short, long, default_value = "conditions.yaml")]
        output: PathBuf,

        /// Also save a config file with default settings
        #[arg(long)]
        write_config: bool,
    },
}

/// Field conditions from a YAML/JSON file, individual flags, or both.
/// Flags override values read from the file.
#[derive(Args, Debug, Clone, Default)]
pub struct ConditionsArgs {
    /// Conditions file (YAML or JSON)
    #[arg(long)]
    pub file: Option<PathBuf>,

    #[arg(long)]
    pub crop: Option<String>,

    /// State name, e.g. Punjab
    #[arg(long)]
    pub location: Option<String>,

    /// Kharif, Rabi or Zaid
    #[arg(long)]
    pub season: Option<String>,

    /// Annual rainfall in mm
    #[arg(long)]
    pub rainfall: Option<f64>,

    /// Mean temperature in °C
    #[arg(long)]
    pub temperature: Option<f64>,

    /// Relative humidity in %
    #[arg(long)]
    pub humidity: Option<f64>,

    #[arg(long)]
    pub soil_ph: Option<f64>,

    /// Cultivated area in hectares
    #[arg(long)]
    pub area: Option<f64>,
}
