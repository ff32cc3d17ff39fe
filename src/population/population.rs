//! Population type
//!
//! This module provides the Population container type.

use std::ops::Index;

use rand::Rng;
use serde::Serialize;

use crate::fitness::traits::Fitness;
use crate::genome::bounds::Bounds;
use crate::genome::point::Point;
use crate::population::individual::Individual;

/// An ordered, fixed-size generation of individuals
///
/// Cloning a population copies every individual, so two clones evolve
/// independently.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Population {
    /// The individuals in this population
    individuals: Vec<Individual>,
    /// Current generation number
    generation: usize,
}

impl Population {
    /// Create an empty population
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a population with the given capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            individuals: Vec::with_capacity(capacity),
            generation: 0,
        }
    }

    /// Create a population from a vector of individuals
    pub fn from_individuals(individuals: Vec<Individual>) -> Self {
        Self {
            individuals,
            generation: 0,
        }
    }

    /// Create a random population with coordinates drawn uniformly from `bounds`
    pub fn random<Fit, R>(size: usize, bounds: &Bounds, fitness: &Fit, rng: &mut R) -> Self
    where
        Fit: Fitness + ?Sized,
        R: Rng,
    {
        let individuals = (0..size)
            .map(|_| Individual::evaluate(Point::generate(rng, bounds), fitness))
            .collect();
        Self {
            individuals,
            generation: 0,
        }
    }

    /// Get the current generation
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Set the generation number
    pub fn set_generation(&mut self, generation: usize) {
        self.generation = generation;
    }

    /// Get the population size
    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    /// Check if the population is empty
    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    /// Add an individual to the population
    pub fn push(&mut self, individual: Individual) {
        self.individuals.push(individual);
    }

    /// Get an iterator over the individuals
    pub fn iter(&self) -> impl Iterator<Item = &Individual> {
        self.individuals.iter()
    }

    /// Get the underlying slice of individuals
    pub fn individuals(&self) -> &[Individual] {
        &self.individuals
    }

    /// Get the best individual
    ///
    /// Ties resolve to the earliest individual in population order.
    pub fn best(&self) -> Option<&Individual> {
        self.individuals.iter().fold(None, |best, candidate| match best {
            Some(current) if !candidate.is_better_than(current) => Some(current),
            _ => Some(candidate),
        })
    }

    /// Get the worst individual
    pub fn worst(&self) -> Option<&Individual> {
        self.individuals.iter().fold(None, |worst, candidate| match worst {
            Some(current) if !current.is_better_than(candidate) => Some(current),
            _ => Some(candidate),
        })
    }

    /// Compute mean fitness
    pub fn mean_fitness(&self) -> Option<f64> {
        if self.individuals.is_empty() {
            return None;
        }
        let total: f64 = self.individuals.iter().map(Individual::fitness).sum();
        Some(total / self.individuals.len() as f64)
    }

    /// Compute fitness standard deviation
    pub fn fitness_std(&self) -> Option<f64> {
        let mean = self.mean_fitness()?;
        if self.individuals.len() < 2 {
            return None;
        }

        let variance = self
            .individuals
            .iter()
            .map(|i| (i.fitness() - mean).powi(2))
            .sum::<f64>()
            / (self.individuals.len() - 1) as f64;
        Some(variance.sqrt())
    }

    /// Compute population diversity (average pairwise distance)
    pub fn diversity(&self) -> f64 {
        if self.len() < 2 {
            return 0.0;
        }

        let mut total_distance = 0.0;
        let mut count = 0;

        for i in 0..self.len() {
            for j in (i + 1)..self.len() {
                total_distance += self.individuals[i]
                    .point()
                    .distance(self.individuals[j].point());
                count += 1;
            }
        }

        total_distance / count as f64
    }
}

impl Index<usize> for Population {
    type Output = Individual;

    fn index(&self, index: usize) -> &Self::Output {
        &self.individuals[index]
    }
}

impl FromIterator<Individual> for Population {
    fn from_iter<I: IntoIterator<Item = Individual>>(iter: I) -> Self {
        Self::from_individuals(iter.into_iter().collect())
    }
}
