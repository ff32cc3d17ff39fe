//! Paired strategy comparison
//!
//! Runs roulette and elite selection side by side from one shared initial
//! population. Each run receives its own clone, so neither can observe the
//! other's offspring.

use std::fmt;

use rand::Rng;
use serde::Serialize;
use tracing::{info, instrument};

use crate::algorithms::simple_ga::{SimpleGA, SimpleGAConfig};
use crate::diagnostics::EvolutionResult;
use crate::error::EvoResult;
use crate::fitness::traits::Fitness;
use crate::operators::selection::{EliteSelection, RouletteSelection};
use crate::operators::traits::SelectionOperator;
use crate::population::population::Population;

/// Best individual found by one selection strategy
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StrategyReport {
    /// Name of the selection strategy
    pub strategy: String,
    /// First coordinate of the best individual
    pub x: f64,
    /// Second coordinate of the best individual
    pub y: f64,
    /// Fitness of the best individual
    pub fitness: f64,
    /// Best fitness in the initial population
    pub initial_best_fitness: f64,
}

impl StrategyReport {
    /// Summarise a finished run
    pub fn from_result(strategy: &str, result: &EvolutionResult) -> Self {
        Self {
            strategy: strategy.to_string(),
            x: result.best.x(),
            y: result.best.y(),
            fitness: result.best.fitness(),
            initial_best_fitness: result.initial_best.fitness(),
        }
    }
}

impl fmt::Display for StrategyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Best individual with {} selection:\n  x = {}, y = {}, fitness = {}",
            self.strategy, self.x, self.y, self.fitness
        )
    }
}

/// Reports for both strategies, roulette first
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StrategyComparison {
    /// Fitness-proportional selection run
    pub roulette: StrategyReport,
    /// Elitist selection run
    pub elite: StrategyReport,
}

impl StrategyComparison {
    /// Reports in output order
    pub fn reports(&self) -> [&StrategyReport; 2] {
        [&self.roulette, &self.elite]
    }
}

impl fmt::Display for StrategyComparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.roulette)?;
        write!(f, "{}", self.elite)
    }
}

/// Evolve a clone of `initial` with the given selection strategy
pub fn run_strategy<S, Fit, R>(
    config: &SimpleGAConfig,
    selection: S,
    fitness: Fit,
    initial: &Population,
    rng: &mut R,
) -> EvoResult<EvolutionResult>
where
    S: SelectionOperator,
    Fit: Fitness,
    R: Rng,
{
    SimpleGA::from_config(config.clone(), selection, fitness)?.run_from(initial.clone(), rng)
}

/// Compare roulette and elite selection from one random initial population
#[instrument(
    level = "info",
    skip_all,
    fields(
        population_size = config.population_size,
        generations = config.generations,
        mutation_rate = config.mutation_rate
    )
)]
pub fn compare_strategies<Fit, R>(
    config: &SimpleGAConfig,
    fitness: Fit,
    rng: &mut R,
) -> EvoResult<StrategyComparison>
where
    Fit: Fitness,
    R: Rng,
{
    config.validate()?;
    let initial = Population::random(config.population_size, &config.bounds, &fitness, rng);
    compare_strategies_from(config, fitness, &initial, rng)
}

/// Compare roulette and elite selection from a caller-supplied initial population
pub fn compare_strategies_from<Fit, R>(
    config: &SimpleGAConfig,
    fitness: Fit,
    initial: &Population,
    rng: &mut R,
) -> EvoResult<StrategyComparison>
where
    Fit: Fitness,
    R: Rng,
{
    let roulette_result = run_strategy(config, RouletteSelection, &fitness, initial, rng)?;
    let roulette = StrategyReport::from_result(RouletteSelection.name(), &roulette_result);
    info!(fitness = roulette.fitness, "Roulette run finished");

    let elite_result = run_strategy(config, EliteSelection, &fitness, initial, rng)?;
    let elite = StrategyReport::from_result(EliteSelection.name(), &elite_result);
    info!(fitness = elite.fitness, "Elite run finished");

    Ok(StrategyComparison { roulette, elite })
}
