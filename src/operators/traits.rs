//! Operator traits
//!
//! This module defines the core operator traits for genetic algorithms.

use rand::Rng;

use crate::genome::point::Point;
use crate::population::individual::Individual;

/// Selection operator trait
///
/// Selects individuals from a population for reproduction.
pub trait SelectionOperator: Send + Sync {
    /// Select a single individual from the population
    ///
    /// Returns the index of the selected individual. The population must be non-empty.
    fn select<R: Rng>(&self, population: &[Individual], rng: &mut R) -> usize;

    /// Select a single individual and return it by reference
    fn select_individual<'a, R: Rng>(
        &self,
        population: &'a [Individual],
        rng: &mut R,
    ) -> &'a Individual {
        &population[self.select(population, rng)]
    }

    /// Human-readable name used in reports and logs
    fn name(&self) -> &'static str;
}

/// Crossover operator trait
///
/// Combines two parents into a single offspring point. Parents are read-only
/// and may be the same point.
pub trait CrossoverOperator: Send + Sync {
    /// Produce an offspring point from two parents
    fn crossover<R: Rng>(&self, parent1: &Point, parent2: &Point, rng: &mut R) -> Point;
}

/// Mutation operator trait
///
/// Applies random changes to a point.
pub trait MutationOperator: Send + Sync {
    /// Apply mutation to a point in place
    ///
    /// Returns `true` if the point was perturbed, so callers know to re-evaluate it.
    fn mutate<R: Rng>(&self, point: &mut Point, rng: &mut R) -> bool;

    /// Probability that a call perturbs the point
    fn mutation_probability(&self) -> f64 {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    // Mock selection operator for testing
    struct MockSelection;

    impl SelectionOperator for MockSelection {
        fn select<R: Rng>(&self, population: &[Individual], rng: &mut R) -> usize {
            rng.gen_range(0..population.len())
        }

        fn name(&self) -> &'static str {
            "mock"
        }
    }

    fn create_population(size: usize) -> Vec<Individual> {
        (0..size)
            .map(|i| Individual::with_fitness(Point::new(i as f64, 0.0), i as f64))
            .collect()
    }

    #[test]
    fn test_select_individual_matches_index() {
        let population = create_population(10);
        let mut rng_a = StdRng::seed_from_u64(9);
        let mut rng_b = StdRng::seed_from_u64(9);

        let idx = MockSelection.select(&population, &mut rng_a);
        let chosen = MockSelection.select_individual(&population, &mut rng_b);
        assert_eq!(chosen, &population[idx]);
    }
}
