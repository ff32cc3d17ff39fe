//! Diagnostics and statistics
//!
//! This module provides statistics collection and analysis for evolutionary runs.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::population::individual::Individual;
use crate::population::population::Population;

/// Statistics for a single generation
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GenerationStats {
    /// Generation number
    pub generation: usize,
    /// Total fitness evaluations so far
    pub evaluations: usize,
    /// Best fitness in this generation
    pub best_fitness: f64,
    /// Worst fitness in this generation
    pub worst_fitness: f64,
    /// Mean fitness
    pub mean_fitness: f64,
    /// Fitness standard deviation
    pub fitness_std: f64,
    /// Population diversity
    pub diversity: f64,
}

impl GenerationStats {
    /// Compute statistics from a population
    pub fn from_population(population: &Population, generation: usize, evaluations: usize) -> Self {
        Self {
            generation,
            evaluations,
            best_fitness: population
                .best()
                .map(Individual::fitness)
                .unwrap_or(f64::NEG_INFINITY),
            worst_fitness: population
                .worst()
                .map(Individual::fitness)
                .unwrap_or(f64::INFINITY),
            mean_fitness: population.mean_fitness().unwrap_or(0.0),
            fitness_std: population.fitness_std().unwrap_or(0.0),
            diversity: population.diversity(),
        }
    }
}

/// Statistics collector for an entire evolution run
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct EvolutionStats {
    /// Statistics per generation, starting with the initial population
    pub generations: Vec<GenerationStats>,
    /// Total runtime in milliseconds
    pub total_runtime_ms: f64,
}

impl EvolutionStats {
    /// Create a new stats collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a generation's statistics
    pub fn record(&mut self, stats: GenerationStats) {
        self.generations.push(stats);
    }

    /// Get the number of generations recorded
    pub fn num_generations(&self) -> usize {
        self.generations.len()
    }

    /// Get the best fitness across all generations
    pub fn best_fitness(&self) -> Option<f64> {
        self.generations
            .iter()
            .map(|g| g.best_fitness)
            .max_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
    }

    /// Get the final best fitness
    pub fn final_best_fitness(&self) -> Option<f64> {
        self.generations.last().map(|g| g.best_fitness)
    }

    /// Get the history of best fitness values
    pub fn best_fitness_history(&self) -> Vec<f64> {
        self.generations.iter().map(|g| g.best_fitness).collect()
    }

    /// Set the total runtime
    pub fn set_runtime(&mut self, duration: Duration) {
        self.total_runtime_ms = duration.as_secs_f64() * 1000.0;
    }
}

/// Result of an evolution run
#[derive(Clone, Debug)]
pub struct EvolutionResult {
    /// Best individual of the final population
    pub best: Individual,
    /// Best individual of the initial population
    pub initial_best: Individual,
    /// The final population
    pub final_population: Population,
    /// Number of generations completed
    pub generations: usize,
    /// Total fitness evaluations
    pub evaluations: usize,
    /// Statistics for the run
    pub stats: EvolutionStats,
}

impl EvolutionResult {
    /// Fitness of the best final individual
    pub fn best_fitness(&self) -> f64 {
        self.best.fitness()
    }
}

pub mod prelude {
    pub use super::{EvolutionResult, EvolutionStats, GenerationStats};
}
