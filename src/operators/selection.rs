//! Selection operators
//!
//! This module provides parent selection strategies for the generational loop.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::OperatorError;
use crate::operators::traits::SelectionOperator;
use crate::population::individual::Individual;

/// Roulette wheel selection (fitness proportionate)
///
/// Draws a point uniformly in `[0, total fitness)` and walks the population in
/// order, returning the first individual whose running fitness sum reaches it.
/// When the total is not positive, or the walk never reaches the point, the
/// last individual is returned.
#[derive(Clone, Copy, Debug, Default)]
pub struct RouletteSelection;

impl RouletteSelection {
    /// Create a new roulette selection
    pub fn new() -> Self {
        Self
    }
}

impl SelectionOperator for RouletteSelection {
    fn select<R: Rng>(&self, population: &[Individual], rng: &mut R) -> usize {
        assert!(!population.is_empty(), "Population cannot be empty");

        let last = population.len() - 1;
        let total: f64 = population.iter().map(Individual::fitness).sum();
        if !(total > 0.0 && total.is_finite()) {
            return last;
        }

        let selection_point = rng.gen::<f64>() * total;
        let mut cumulative = 0.0;
        for (idx, individual) in population.iter().enumerate() {
            cumulative += individual.fitness();
            if cumulative >= selection_point {
                return idx;
            }
        }
        last
    }

    fn name(&self) -> &'static str {
        "roulette"
    }
}

/// Elite selection
///
/// Always returns the fittest individual, preferring the earliest on ties.
/// Consumes no randomness, so repeated calls on one generation return the same
/// individual.
#[derive(Clone, Copy, Debug, Default)]
pub struct EliteSelection;

impl EliteSelection {
    /// Create a new elite selection
    pub fn new() -> Self {
        Self
    }
}

impl SelectionOperator for EliteSelection {
    fn select<R: Rng>(&self, population: &[Individual], _rng: &mut R) -> usize {
        assert!(!population.is_empty(), "Population cannot be empty");

        let mut best = 0;
        for (idx, individual) in population.iter().enumerate().skip(1) {
            if individual.is_better_than(&population[best]) {
                best = idx;
            }
        }
        best
    }

    fn name(&self) -> &'static str {
        "elite"
    }
}

/// Tournament selection operator
///
/// Selects the best individual from a random subset of the population.
#[derive(Clone, Debug)]
pub struct TournamentSelection {
    /// Tournament size (number of individuals competing)
    pub tournament_size: usize,
}

impl TournamentSelection {
    /// Create a new tournament selection with the given size
    pub fn new(tournament_size: usize) -> Result<Self, OperatorError> {
        if tournament_size == 0 {
            return Err(OperatorError::InvalidConfiguration(
                "tournament size must be at least 1".to_string(),
            ));
        }
        Ok(Self { tournament_size })
    }

    /// Create binary tournament selection (size = 2)
    pub fn binary() -> Self {
        Self { tournament_size: 2 }
    }
}

impl SelectionOperator for TournamentSelection {
    fn select<R: Rng>(&self, population: &[Individual], rng: &mut R) -> usize {
        assert!(!population.is_empty(), "Population cannot be empty");

        let tournament_size = self.tournament_size.min(population.len());
        let indices: Vec<usize> = (0..population.len()).collect();

        let mut contenders = indices.choose_multiple(rng, tournament_size).copied();
        let first = contenders.next().unwrap_or(0);
        contenders.fold(first, |best, idx| {
            if population[idx].is_better_than(&population[best]) {
                idx
            } else {
                best
            }
        })
    }

    fn name(&self) -> &'static str {
        "tournament"
    }
}
