//! Individual wrapper type
//!
//! This module provides the Individual type that pairs a point with its fitness.

use std::cmp::Ordering;

use rand::Rng;
use serde::Serialize;

use crate::fitness::traits::Fitness;
use crate::genome::point::Point;
use crate::operators::traits::MutationOperator;

/// An individual in the population
///
/// The fitness is computed when the individual is built and recomputed whenever
/// its coordinates change, so it always equals the objective at `point`. Fields
/// are private to keep that true.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Individual {
    point: Point,
    fitness: f64,
    birth_generation: usize,
}

impl Individual {
    /// Create an individual at `point`, evaluating its fitness eagerly
    pub fn evaluate<Fit: Fitness + ?Sized>(point: Point, fitness: &Fit) -> Self {
        Self {
            fitness: fitness.evaluate(&point),
            point,
            birth_generation: 0,
        }
    }

    /// Create an individual at `(x, y)`, evaluating its fitness eagerly
    pub fn new<Fit: Fitness + ?Sized>(x: f64, y: f64, fitness: &Fit) -> Self {
        Self::evaluate(Point::new(x, y), fitness)
    }

    /// Create an individual with an explicit fitness value
    ///
    /// The value is taken as given and is not checked against any objective.
    /// Intended for synthetic populations in tests and diagnostics.
    pub fn with_fitness(point: Point, fitness: f64) -> Self {
        Self {
            point,
            fitness,
            birth_generation: 0,
        }
    }

    /// Tag the individual with the generation that produced it
    pub fn with_generation(mut self, generation: usize) -> Self {
        self.birth_generation = generation;
        self
    }

    /// First coordinate
    pub fn x(&self) -> f64 {
        self.point.x
    }

    /// Second coordinate
    pub fn y(&self) -> f64 {
        self.point.y
    }

    /// The point this individual represents
    pub fn point(&self) -> &Point {
        &self.point
    }

    /// Cached fitness value
    pub fn fitness(&self) -> f64 {
        self.fitness
    }

    /// Generation when this individual was created
    pub fn birth_generation(&self) -> usize {
        self.birth_generation
    }

    /// Apply a mutation operator and refresh the fitness if the point moved
    pub fn mutated<M, Fit, R>(mut self, mutation: &M, fitness: &Fit, rng: &mut R) -> Self
    where
        M: MutationOperator + ?Sized,
        Fit: Fitness + ?Sized,
        R: Rng,
    {
        if mutation.mutate(&mut self.point, rng) {
            self.fitness = fitness.evaluate(&self.point);
        }
        self
    }

    /// Check if this individual is better than another
    pub fn is_better_than(&self, other: &Self) -> bool {
        self.fitness > other.fitness
    }
}

impl PartialOrd for Individual {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.fitness.partial_cmp(&other.fitness)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fitness::benchmarks::PeakFitness;
    use crate::operators::mutation::GaussianMutation;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_individual_new_computes_fitness() {
        let individual = Individual::new(1.0, 2.0, &PeakFitness);
        assert_eq!(individual.x(), 1.0);
        assert_eq!(individual.y(), 2.0);
        assert_relative_eq!(individual.fitness(), 1.0 / 6.0);
        assert_eq!(individual.birth_generation(), 0);
    }

    #[test]
    fn test_individual_with_fitness() {
        let individual = Individual::with_fitness(Point::new(1.0, 1.0), 42.0);
        assert_eq!(individual.fitness(), 42.0);
    }

    #[test]
    fn test_individual_is_better_than() {
        let near = Individual::new(0.1, 0.1, &PeakFitness);
        let far = Individual::new(3.0, 3.0, &PeakFitness);

        assert!(near.is_better_than(&far));
        assert!(!far.is_better_than(&near));
        assert!(near > far);
    }

    #[test]
    fn test_mutated_refreshes_fitness() {
        let mut rng = StdRng::seed_from_u64(3);
        let mutation = GaussianMutation::new(1.0).unwrap();
        let original = Individual::new(0.5, -0.5, &PeakFitness);

        let mutated = original.clone().mutated(&mutation, &PeakFitness, &mut rng);

        assert_ne!(mutated.point(), original.point());
        assert_relative_eq!(mutated.fitness(), PeakFitness.evaluate(mutated.point()));
    }

    #[test]
    fn test_mutated_with_zero_rate_is_identity() {
        let mut rng = StdRng::seed_from_u64(3);
        let mutation = GaussianMutation::new(0.0).unwrap();
        let original = Individual::new(0.5, -0.5, &PeakFitness);

        let unchanged = original.clone().mutated(&mutation, &PeakFitness, &mut rng);
        assert_eq!(unchanged, original);
    }

    #[test]
    fn test_with_generation_tags_birth() {
        let individual = Individual::new(0.0, 0.0, &PeakFitness).with_generation(10);
        assert_eq!(individual.birth_generation(), 10);
    }
}
