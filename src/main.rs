mod cli;

use anyhow::{bail, Context, Result};
use chrono::Datelike;
use clap::Parser;
use cli::{Cli, Commands, ConditionsArgs};
use cropwise::config::{self, Config, OutputFormat};
use cropwise::logic::analysis;
use cropwise::report::{self, Report};
use cropwise::{Advisor, Crop, CropConditions, Predictor};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use std::path::Path;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let default_filter = match cli.verbose {
        0 => "warn",
        1 => "cropwise=debug",
        _ => "cropwise=trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;
    let format = cli.format.unwrap_or(config.output.format);
    let seed = cli.seed.or(config.engine.seed);

    match cli.command {
        Commands::Predict(args) => {
            let tables = config.reference_tables()?;
            let conditions = resolve_conditions(&args, &config, None)?;
            let result = Predictor::new(&tables).predict(&conditions, &mut rng(seed))?;
            emit(format, &result, || report::render_prediction(&result))?;
        }
        Commands::Advise(args) => {
            let tables = config.reference_tables()?;
            let conditions = resolve_conditions(&args, &config, None)?;
            let advisory = Advisor::new(&tables).advise(&conditions)?;
            emit(format, &advisory, || report::render_advisory(&advisory))?;
        }
        Commands::Report(args) => {
            let tables = config.reference_tables()?;
            let conditions = resolve_conditions(&args, &config, None)?;
            let full = Report::build(
                &tables,
                &conditions,
                &mut rng(seed),
                chrono::Local::now().year(),
                config.engine.history_years,
            )?;
            emit(format, &full, || report::render_report(&full))?;
        }
        Commands::Compare { crops, conditions } => {
            let tables = config.reference_tables()?;
            let crops: Vec<Crop> = crops.iter().map(|c| Crop::from(c.as_str())).collect();
            let base = resolve_conditions(&conditions, &config, crops.first())?;
            let comparisons = analysis::compare_crops(&tables, &base, &crops)?;
            emit(format, &comparisons, || report::render_comparison(&comparisons))?;
        }
        Commands::Tables => {
            let tables = config.reference_tables()?;
            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&tables)?),
                _ => print!("{}", tables.to_yaml()?),
            }
        }
        Commands::Init {
            output,
            write_config,
        } => {
            let conditions = config::prompt_conditions(&config.defaults)?;
            std::fs::write(&output, serde_yaml::to_string(&conditions)?)
                .with_context(|| format!("Failed to write {}", output.display()))?;
            println!("Conditions saved to {}", output.display());

            if write_config {
                let path = Config::default_config_path()?;
                config.save(&path)?;
                println!("Configuration saved to {}", path.display());
            }
            println!("Run `cropwise report --file {}`", output.display());
        }
    }

    Ok(())
}

fn rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(seed) => {
            tracing::debug!("Using fixed seed {}", seed);
            ChaCha8Rng::seed_from_u64(seed)
        }
        None => ChaCha8Rng::from_entropy(),
    }
}

fn read_conditions_file(path: &Path) -> Result<CropConditions> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read conditions file {}", path.display()))?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let conditions = if is_json {
        serde_json::from_str(&content)?
    } else {
        serde_yaml::from_str(&content)?
    };
    Ok(conditions)
}

/// Build conditions from the file (if any), then apply flag overrides.
fn resolve_conditions(
    args: &ConditionsArgs,
    config: &Config,
    fallback_crop: Option<&Crop>,
) -> Result<CropConditions> {
    let mut conditions = match &args.file {
        Some(path) => read_conditions_file(path)?,
        None => {
            let crop = match (&args.crop, fallback_crop) {
                (Some(name), _) => Crop::from(name.as_str()),
                (None, Some(crop)) => crop.clone(),
                (None, None) => bail!("--crop is required unless --file is given"),
            };
            CropConditions::new(
                crop,
                config.defaults.location.clone(),
                config.defaults.season.clone(),
            )
            .with_area(config.defaults.area_hectares)
        }
    };

    if let Some(crop) = &args.crop {
        conditions.crop = Crop::from(crop.as_str());
    }
    if let Some(location) = &args.location {
        conditions.location = location.clone();
    }
    if let Some(season) = &args.season {
        conditions.season = season.as_str().into();
    }
    if let Some(v) = args.rainfall {
        conditions.rainfall_mm = v;
    }
    if let Some(v) = args.temperature {
        conditions.temperature_c = v;
    }
    if let Some(v) = args.humidity {
        conditions.humidity_percent = v;
    }
    if let Some(v) = args.soil_ph {
        conditions.soil_ph = v;
    }
    if let Some(v) = args.area {
        conditions.area_hectares = v;
    }

    if !conditions.crop.is_known() {
        tracing::warn!(
            "Unknown crop {}; using default yield and generic advice",
            conditions.crop
        );
    }
    Ok(conditions)
}

fn emit<T: Serialize>(format: OutputFormat, value: &T, text: impl FnOnce() -> String) -> Result<()> {
    match format {
        OutputFormat::Text => print!("{}", text()),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
        OutputFormat::Yaml => print!("{}", serde_yaml::to_string(value)?),
    }
    Ok(())
}
