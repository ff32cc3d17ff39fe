//! Mutation operators
//!
//! This module provides mutation operators for point genomes.

use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::error::OperatorError;
use crate::genome::point::Point;
use crate::operators::traits::MutationOperator;

/// Default standard deviation of the Gaussian perturbation
pub const DEFAULT_SIGMA: f64 = 0.1;

/// Gaussian mutation
///
/// A single Bernoulli trial with probability `rate` decides whether the point
/// mutates. On success both coordinates receive independent N(0, sigma) noise;
/// otherwise neither changes.
#[derive(Clone, Copy, Debug)]
pub struct GaussianMutation {
    rate: f64,
    sigma: f64,
    noise: Normal<f64>,
}

impl GaussianMutation {
    /// Create a Gaussian mutation with the default sigma of 0.1
    pub fn new(rate: f64) -> Result<Self, OperatorError> {
        Self::with_sigma(rate, DEFAULT_SIGMA)
    }

    /// Create a Gaussian mutation with an explicit standard deviation
    pub fn with_sigma(rate: f64, sigma: f64) -> Result<Self, OperatorError> {
        if !(0.0..=1.0).contains(&rate) {
            return Err(OperatorError::InvalidConfiguration(format!(
                "mutation rate must be in [0, 1], got {}",
                rate
            )));
        }
        if !(sigma >= 0.0 && sigma.is_finite()) {
            return Err(OperatorError::InvalidConfiguration(format!(
                "sigma must be non-negative and finite, got {}",
                sigma
            )));
        }
        let noise = Normal::new(0.0, sigma)
            .map_err(|e| OperatorError::InvalidConfiguration(e.to_string()))?;
        Ok(Self { rate, sigma, noise })
    }

    /// Probability of mutating on each call
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Standard deviation of the noise
    pub fn sigma(&self) -> f64 {
        self.sigma
    }
}

impl MutationOperator for GaussianMutation {
    fn mutate<R: Rng>(&self, point: &mut Point, rng: &mut R) -> bool {
        if rng.gen::<f64>() >= self.rate {
            return false;
        }
        point.x += self.noise.sample(rng);
        point.y += self.noise.sample(rng);
        true
    }

    fn mutation_probability(&self) -> f64 {
        self.rate
    }
}
