//! Crossover operators
//!
//! This module provides recombination operators for point genomes.

use rand::Rng;

use crate::error::OperatorError;
use crate::genome::point::Point;
use crate::operators::traits::CrossoverOperator;

/// Arithmetic crossover
///
/// The offspring is a weighted average of its parents, coordinate by
/// coordinate. With weight 0.5 this is the midpoint, and crossing a point with
/// itself returns the same point. Consumes no randomness.
#[derive(Clone, Copy, Debug)]
pub struct ArithmeticCrossover {
    /// Weight for parent1 (parent2 weight = 1 - weight)
    pub weight: f64,
}

impl ArithmeticCrossover {
    /// Create a new arithmetic crossover with the given weight
    pub fn new(weight: f64) -> Result<Self, OperatorError> {
        if !(0.0..=1.0).contains(&weight) {
            return Err(OperatorError::InvalidConfiguration(format!(
                "crossover weight must be in [0, 1], got {}",
                weight
            )));
        }
        Ok(Self { weight })
    }

    /// Midpoint blend (weight 0.5)
    pub fn midpoint() -> Self {
        Self { weight: 0.5 }
    }
}

impl Default for ArithmeticCrossover {
    fn default() -> Self {
        Self::midpoint()
    }
}

impl CrossoverOperator for ArithmeticCrossover {
    fn crossover<R: Rng>(&self, parent1: &Point, parent2: &Point, _rng: &mut R) -> Point {
        let w = self.weight;
        Point::new(
            w * parent1.x + (1.0 - w) * parent2.x,
            w * parent1.y + (1.0 - w) * parent2.y,
        )
    }
}
