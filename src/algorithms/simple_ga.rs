//! Simple Genetic Algorithm
//!
//! This module implements a standard generational genetic algorithm over
//! two-dimensional points.

use std::fs;
use std::path::Path;
use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::diagnostics::{EvolutionResult, EvolutionStats, GenerationStats};
use crate::error::{EvoResult, EvolutionError};
use crate::fitness::traits::Fitness;
use crate::genome::bounds::Bounds;
use crate::operators::crossover::ArithmeticCrossover;
use crate::operators::mutation::{GaussianMutation, DEFAULT_SIGMA};
use crate::operators::traits::{CrossoverOperator, MutationOperator, SelectionOperator};
use crate::population::individual::Individual;
use crate::population::population::Population;

/// Configuration for the Simple GA
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimpleGAConfig {
    /// Population size, constant across generations
    pub population_size: usize,
    /// Number of generations to run
    pub generations: usize,
    /// Probability that an offspring is mutated
    pub mutation_rate: f64,
    /// Standard deviation of the mutation noise
    pub mutation_sigma: f64,
    /// Sampling box for the initial population
    pub bounds: Bounds,
    /// Seed for the random source (None draws one from the OS)
    pub seed: Option<u64>,
}

impl Default for SimpleGAConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            generations: 1000,
            mutation_rate: 0.1,
            mutation_sigma: DEFAULT_SIGMA,
            bounds: Bounds::default(),
            seed: None,
        }
    }
}

impl SimpleGAConfig {
    /// Check every parameter, failing on the first invalid one
    pub fn validate(&self) -> EvoResult<()> {
        if self.population_size == 0 {
            return Err(EvolutionError::Configuration(
                "population size must be at least 1".to_string(),
            ));
        }
        if self.generations == 0 {
            return Err(EvolutionError::Configuration(
                "generations must be at least 1".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(EvolutionError::Configuration(format!(
                "mutation rate must be in [0, 1], got {}",
                self.mutation_rate
            )));
        }
        if !(self.mutation_sigma >= 0.0 && self.mutation_sigma.is_finite()) {
            return Err(EvolutionError::Configuration(format!(
                "mutation sigma must be non-negative and finite, got {}",
                self.mutation_sigma
            )));
        }
        self.bounds.validate()
    }

    /// Parse a configuration from JSON; absent fields take their defaults
    pub fn from_json_str(json: &str) -> EvoResult<Self> {
        serde_json::from_str(json).map_err(|e| EvolutionError::ConfigLoad(e.to_string()))
    }

    /// Read a JSON configuration file
    pub fn from_json_file(path: impl AsRef<Path>) -> EvoResult<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .map_err(|e| EvolutionError::ConfigLoad(format!("{}: {}", path.display(), e)))?;
        Self::from_json_str(&contents)
    }

    /// Build the random source described by `seed`
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

/// Builder for SimpleGA
pub struct SimpleGABuilder<S, C, M, Fit> {
    config: SimpleGAConfig,
    selection: Option<S>,
    crossover: Option<C>,
    mutation: Option<M>,
    fitness: Option<Fit>,
}

impl SimpleGABuilder<(), (), (), ()> {
    /// Create a new builder with default configuration
    pub fn new() -> Self {
        Self {
            config: SimpleGAConfig::default(),
            selection: None,
            crossover: None,
            mutation: None,
            fitness: None,
        }
    }
}

impl Default for SimpleGABuilder<(), (), (), ()> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, C, M, Fit> SimpleGABuilder<S, C, M, Fit> {
    /// Replace the whole configuration
    pub fn config(mut self, config: SimpleGAConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the population size
    pub fn population_size(mut self, size: usize) -> Self {
        self.config.population_size = size;
        self
    }

    /// Set the number of generations
    pub fn generations(mut self, generations: usize) -> Self {
        self.config.generations = generations;
        self
    }

    /// Set the initial sampling bounds
    pub fn bounds(mut self, bounds: Bounds) -> Self {
        self.config.bounds = bounds;
        self
    }

    /// Set the selection operator
    pub fn selection<NewS>(self, selection: NewS) -> SimpleGABuilder<NewS, C, M, Fit>
    where
        NewS: SelectionOperator,
    {
        SimpleGABuilder {
            config: self.config,
            selection: Some(selection),
            crossover: self.crossover,
            mutation: self.mutation,
            fitness: self.fitness,
        }
    }

    /// Set the crossover operator
    pub fn crossover<NewC>(self, crossover: NewC) -> SimpleGABuilder<S, NewC, M, Fit>
    where
        NewC: CrossoverOperator,
    {
        SimpleGABuilder {
            config: self.config,
            selection: self.selection,
            crossover: Some(crossover),
            mutation: self.mutation,
            fitness: self.fitness,
        }
    }

    /// Set the mutation operator
    pub fn mutation<NewM>(self, mutation: NewM) -> SimpleGABuilder<S, C, NewM, Fit>
    where
        NewM: MutationOperator,
    {
        SimpleGABuilder {
            config: self.config,
            selection: self.selection,
            crossover: self.crossover,
            mutation: Some(mutation),
            fitness: self.fitness,
        }
    }

    /// Set the fitness function
    pub fn fitness<NewFit>(self, fitness: NewFit) -> SimpleGABuilder<S, C, M, NewFit>
    where
        NewFit: Fitness,
    {
        SimpleGABuilder {
            config: self.config,
            selection: self.selection,
            crossover: self.crossover,
            mutation: self.mutation,
            fitness: Some(fitness),
        }
    }
}

impl<S, C, M, Fit> SimpleGABuilder<S, C, M, Fit>
where
    S: SelectionOperator,
    C: CrossoverOperator,
    M: MutationOperator,
    Fit: Fitness,
{
    /// Build the SimpleGA instance
    pub fn build(self) -> EvoResult<SimpleGA<S, C, M, Fit>> {
        self.config.validate()?;

        let selection = self.selection.ok_or_else(|| {
            EvolutionError::Configuration("Selection operator must be specified".to_string())
        })?;

        let crossover = self.crossover.ok_or_else(|| {
            EvolutionError::Configuration("Crossover operator must be specified".to_string())
        })?;

        let mutation = self.mutation.ok_or_else(|| {
            EvolutionError::Configuration("Mutation operator must be specified".to_string())
        })?;

        let fitness = self.fitness.ok_or_else(|| {
            EvolutionError::Configuration("Fitness function must be specified".to_string())
        })?;

        Ok(SimpleGA {
            config: self.config,
            selection,
            crossover,
            mutation,
            fitness,
        })
    }
}

/// Simple Genetic Algorithm
///
/// Each generation is rebuilt from scratch: for every slot two parents are
/// selected from the previous generation, crossed over, and the offspring is
/// mutated. The previous generation is read-only while its successor is built
/// and is discarded afterwards.
pub struct SimpleGA<S, C, M, Fit> {
    config: SimpleGAConfig,
    selection: S,
    crossover: C,
    mutation: M,
    fitness: Fit,
}

impl<S, Fit> SimpleGA<S, ArithmeticCrossover, GaussianMutation, Fit>
where
    S: SelectionOperator,
    Fit: Fitness,
{
    /// Midpoint crossover and Gaussian mutation parameterised by `config`
    pub fn from_config(config: SimpleGAConfig, selection: S, fitness: Fit) -> EvoResult<Self> {
        config.validate()?;
        let mutation = GaussianMutation::with_sigma(config.mutation_rate, config.mutation_sigma)?;
        Ok(Self {
            config,
            selection,
            crossover: ArithmeticCrossover::midpoint(),
            mutation,
            fitness,
        })
    }
}

impl<S, C, M, Fit> SimpleGA<S, C, M, Fit>
where
    S: SelectionOperator,
    C: CrossoverOperator,
    M: MutationOperator,
    Fit: Fitness,
{
    /// The configuration this instance runs with
    pub fn config(&self) -> &SimpleGAConfig {
        &self.config
    }

    /// The fitness function
    pub fn fitness(&self) -> &Fit {
        &self.fitness
    }

    /// Sample a fresh initial population from the configured bounds
    pub fn initial_population<R: Rng>(&self, rng: &mut R) -> Population {
        Population::random(
            self.config.population_size,
            &self.config.bounds,
            &self.fitness,
            rng,
        )
    }

    /// Run the genetic algorithm from a random initial population
    pub fn run<R: Rng>(&self, rng: &mut R) -> EvoResult<EvolutionResult> {
        let initial = self.initial_population(rng);
        self.run_from(initial, rng)
    }

    /// Run the genetic algorithm from the given initial population
    ///
    /// The population must hold exactly `population_size` individuals.
    #[instrument(
        level = "info",
        skip_all,
        fields(
            strategy = self.selection.name(),
            population_size = self.config.population_size,
            generations = self.config.generations
        )
    )]
    pub fn run_from<R: Rng>(&self, initial: Population, rng: &mut R) -> EvoResult<EvolutionResult> {
        if initial.is_empty() {
            return Err(EvolutionError::EmptyPopulation);
        }
        if initial.len() != self.config.population_size {
            return Err(EvolutionError::Configuration(format!(
                "initial population has {} individuals, expected {}",
                initial.len(),
                self.config.population_size
            )));
        }

        let start_time = Instant::now();
        let initial_best = initial
            .best()
            .ok_or(EvolutionError::EmptyPopulation)?
            .clone();
        info!(initial_best = initial_best.fitness(), "Starting evolution");

        let mut stats = EvolutionStats::new();
        let mut evaluations = initial.len();
        stats.record(GenerationStats::from_population(&initial, 0, evaluations));

        let mut population = initial;
        for generation in 1..=self.config.generations {
            population = self.next_generation(&population, generation, rng)?;
            evaluations += population.len();

            let gen_stats = GenerationStats::from_population(&population, generation, evaluations);
            debug!(
                generation,
                best = gen_stats.best_fitness,
                mean = gen_stats.mean_fitness,
                "Generation complete"
            );
            stats.record(gen_stats);
        }

        stats.set_runtime(start_time.elapsed());

        let best = population
            .best()
            .ok_or(EvolutionError::EmptyPopulation)?
            .clone();
        info!(
            best_fitness = best.fitness(),
            x = best.x(),
            y = best.y(),
            runtime_ms = stats.total_runtime_ms,
            "Evolution complete"
        );

        Ok(EvolutionResult {
            best,
            initial_best,
            generations: population.generation(),
            final_population: population,
            evaluations,
            stats,
        })
    }

    /// Build the next generation from an immutable snapshot of the current one
    ///
    /// Returns `EmptyPopulation` when there are no parents to select from.
    pub fn next_generation<R: Rng>(
        &self,
        parents: &Population,
        generation: usize,
        rng: &mut R,
    ) -> EvoResult<Population> {
        if parents.is_empty() {
            return Err(EvolutionError::EmptyPopulation);
        }
        let pool = parents.individuals();
        let mut offspring = Population::with_capacity(self.config.population_size);

        for _ in 0..self.config.population_size {
            let parent1 = self.selection.select_individual(pool, rng);
            let parent2 = self.selection.select_individual(pool, rng);

            let child = self.crossover.crossover(parent1.point(), parent2.point(), rng);
            let child = Individual::evaluate(child, &self.fitness)
                .mutated(&self.mutation, &self.fitness, rng)
                .with_generation(generation);
            offspring.push(child);
        }

        offspring.set_generation(generation);
        Ok(offspring)
    }
}
