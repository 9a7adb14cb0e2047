//! Command-line runner for the Lifepath simulation.
//!
//! Loads a scenario, runs one life, and prints the outcome. All simulation
//! logic lives in `lifepath-core`; this binary only wires logging,
//! configuration, and output around it.
//!
//! # Startup Sequence
//!
//! 1. Initialize structured logging (tracing, to stderr)
//! 2. Load configuration from `lifepath-config.yaml` (or `--config`)
//! 3. Apply command-line overrides and, with `--random`, sample a profile
//! 4. Run the simulation
//! 5. Print the outcome as JSON or as a text report

mod error;
mod report;

use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use lifepath_core::profiles::{random_birth, random_personality};
use lifepath_core::{SimulationConfig, simulate};
use lifepath_world::SimRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::error::EngineError;

/// Default scenario file, relative to the working directory.
const DEFAULT_CONFIG_PATH: &str = "lifepath-config.yaml";

/// Simulate one life year by year and print its trajectory and summary.
#[derive(Parser, Debug)]
#[command(name = "lifepath")]
#[command(about = "Simulate one life trajectory under layered world conditions")]
struct Args {
    /// Scenario file; defaults are used when the default path is missing
    #[arg(long)]
    config: Option<PathBuf>,

    /// Random seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// City key (beijing, shanghai, shenzhen, guangzhou)
    #[arg(long)]
    city: Option<String>,

    /// Age at which the run stops
    #[arg(long)]
    max_age: Option<u32>,

    /// Sample the birth profile and personality instead of reading them
    #[arg(long)]
    random: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,
}

/// How the outcome is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Pretty-printed JSON of the full outcome.
    Json,
    /// Short human-readable report.
    Text,
}

/// Application entry point.
///
/// # Errors
///
/// Returns an error if the configuration cannot be loaded, the scenario is
/// invalid, or the outcome cannot be encoded.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    info!("lifepath starting");
    run(&args)?;
    Ok(())
}

fn run(args: &Args) -> Result<(), EngineError> {
    let mut config = load_config(args.config.as_deref())?;
    apply_overrides(&mut config, args);

    info!(
        birth_year = config.birth.birth_year,
        region = ?config.birth.region,
        country = %config.world.country,
        city = %config.world.city,
        max_age = config.run.max_age,
        seed = ?config.run.seed,
        "Configuration loaded"
    );

    let outcome = simulate(&config)?;
    info!(
        seed = outcome.seed,
        age = outcome.final_state.age,
        end_reason = ?outcome.end_reason,
        events = outcome.events.len(),
        "Simulation complete"
    );

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&outcome)?),
        OutputFormat::Text => print!("{}", report::render(&outcome)),
    }
    Ok(())
}

/// Load the scenario from `path`, or from the default path when present.
fn load_config(path: Option<&Path>) -> Result<SimulationConfig, EngineError> {
    if let Some(path) = path {
        return Ok(SimulationConfig::from_file(path)?);
    }
    let default_path = Path::new(DEFAULT_CONFIG_PATH);
    if default_path.exists() {
        Ok(SimulationConfig::from_file(default_path)?)
    } else {
        info!("Config file not found, using defaults");
        Ok(SimulationConfig::default())
    }
}

/// Apply command-line flags on top of the loaded scenario.
///
/// A random profile is drawn from its own generator, seeded like the run,
/// so the same seed reproduces both the individual and the life.
fn apply_overrides(config: &mut SimulationConfig, args: &Args) {
    if let Some(seed) = args.seed {
        config.run.seed = Some(seed);
    }
    if let Some(city) = &args.city {
        config.world.city.clone_from(city);
    }
    if let Some(max_age) = args.max_age {
        config.run.max_age = max_age;
    }
    if args.random {
        let mut rng = config.run.seed.map_or_else(SimRng::from_entropy, SimRng::seeded);
        config.birth = random_birth(&mut rng);
        config.personality = random_personality(&mut rng);
        config.run.seed = Some(rng.seed());
    }
}
