//! Fitness traits
//!
//! This module defines the fitness evaluation trait.

use crate::genome::point::Point;

/// Fitness evaluation trait
///
/// Maps a point to a real score. Higher is better; the algorithms in this crate
/// always maximize. Implementations must be pure.
pub trait Fitness: Send + Sync {
    /// Evaluate fitness at the given point
    fn evaluate(&self, point: &Point) -> f64;

    /// Evaluate fitness at raw coordinates
    fn evaluate_xy(&self, x: f64, y: f64) -> f64 {
        self.evaluate(&Point::new(x, y))
    }
}

impl<F: Fitness + ?Sized> Fitness for &F {
    fn evaluate(&self, point: &Point) -> f64 {
        (**self).evaluate(point)
    }
}

impl<F: Fitness + ?Sized> Fitness for Box<F> {
    fn evaluate(&self, point: &Point) -> f64 {
        (**self).evaluate(point)
    }
}

/// A simple function wrapper for fitness evaluation
///
/// Lets any `Fn(x, y) -> f64` closure act as the objective.
pub struct FnFitness<F>
where
    F: Fn(f64, f64) -> f64,
{
    f: F,
}

impl<F> FnFitness<F>
where
    F: Fn(f64, f64) -> f64,
{
    /// Create a new function-based fitness evaluator
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> Fitness for FnFitness<F>
where
    F: Fn(f64, f64) -> f64 + Send + Sync,
{
    fn evaluate(&self, point: &Point) -> f64 {
        (self.f)(point.x, point.y)
    }
}

impl<F> std::fmt::Debug for FnFitness<F>
where
    F: Fn(f64, f64) -> f64,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnFitness").finish_non_exhaustive()
    }
}
