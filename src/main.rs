//! Command-line entry point: runs both selection strategies on the peak
//! objective and prints the best individual of each.

use std::path::PathBuf;

use clap::Parser;
use peak_evo::prelude::*;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "peak-evo")]
#[command(about = "Compare roulette and elite selection on f(x, y) = 1 / (1 + x^2 + y^2)")]
struct Args {
    /// JSON configuration file; flags below override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Population size
    #[arg(short, long)]
    population_size: Option<usize>,

    /// Number of generations
    #[arg(short, long)]
    generations: Option<usize>,

    /// Mutation probability per offspring
    #[arg(short, long)]
    mutation_rate: Option<f64>,

    /// Standard deviation of the mutation noise
    #[arg(long)]
    sigma: Option<f64>,

    /// Lower bound of the initial sampling box
    #[arg(long, allow_hyphen_values = true)]
    lower: Option<f64>,

    /// Upper bound of the initial sampling box
    #[arg(long, allow_hyphen_values = true)]
    upper: Option<f64>,

    /// Random seed for a reproducible run
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print the reports as JSON
    #[arg(long)]
    json: bool,

    /// Logging level
    #[arg(long, default_value = "warn")]
    log_level: String,
}

impl Args {
    fn into_config(self) -> EvoResult<SimpleGAConfig> {
        let mut config = match &self.config {
            Some(path) => SimpleGAConfig::from_json_file(path)?,
            None => SimpleGAConfig::default(),
        };

        if let Some(size) = self.population_size {
            config.population_size = size;
        }
        if let Some(generations) = self.generations {
            config.generations = generations;
        }
        if let Some(rate) = self.mutation_rate {
            config.mutation_rate = rate;
        }
        if let Some(sigma) = self.sigma {
            config.mutation_sigma = sigma;
        }
        if let Some(lower) = self.lower {
            config.bounds.min = lower;
        }
        if let Some(upper) = self.upper {
            config.bounds.max = upper;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }

        config.validate()?;
        Ok(config)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => tracing::Level::TRACE,
        "debug" => tracing::Level::DEBUG,
        "info" => tracing::Level::INFO,
        "warn" => tracing::Level::WARN,
        "error" => tracing::Level::ERROR,
        _ => tracing::Level::WARN,
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();

    let json = args.json;
    let config = match args.into_config() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            return Err(e.into());
        }
    };
    info!(?config, "Configuration loaded");

    let mut rng = config.rng();
    let comparison = compare_strategies(&config, PeakFitness, &mut rng)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&comparison)?);
    } else {
        println!("{}", comparison);
    }

    Ok(())
}
