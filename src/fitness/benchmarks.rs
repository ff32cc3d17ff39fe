//! Benchmark fitness functions
//!
//! This module provides ready-made objectives over the plane.

use crate::fitness::traits::Fitness;
use crate::genome::point::Point;

/// Trait for benchmark functions
pub trait BenchmarkFunction: Fitness {
    /// Name of the benchmark function
    fn name(&self) -> &'static str;

    /// Optimal (maximum) fitness value
    fn optimal_fitness(&self) -> f64;

    /// Location of the optimum
    fn optimal_solution(&self) -> Point;
}

/// Peak function: f(x, y) = 1 / (1 + x² + y²)
///
/// Smooth unimodal peak with maximum 1.0 at the origin. The denominator is
/// always at least 1, so the value lies in (0, 1] for every finite input.
#[derive(Clone, Copy, Debug, Default)]
pub struct PeakFitness;

impl PeakFitness {
    /// Create a new peak function
    pub fn new() -> Self {
        Self
    }
}

impl Fitness for PeakFitness {
    fn evaluate(&self, point: &Point) -> f64 {
        1.0 / (1.0 + point.x * point.x + point.y * point.y)
    }
}

impl BenchmarkFunction for PeakFitness {
    fn name(&self) -> &'static str {
        "Peak"
    }

    fn optimal_fitness(&self) -> f64 {
        1.0
    }

    fn optimal_solution(&self) -> Point {
        Point::origin()
    }
}

/// Negated sphere: f(x, y) = -(x² + y²)
///
/// Never positive, so fitness-proportional selection falls back to its
/// degenerate branch on every draw.
#[derive(Clone, Copy, Debug, Default)]
pub struct NegatedSphere;

impl NegatedSphere {
    /// Create a new negated sphere
    pub fn new() -> Self {
        Self
    }
}

impl Fitness for NegatedSphere {
    fn evaluate(&self, point: &Point) -> f64 {
        -point.norm_squared()
    }
}

impl BenchmarkFunction for NegatedSphere {
    fn name(&self) -> &'static str {
        "NegatedSphere"
    }

    fn optimal_fitness(&self) -> f64 {
        0.0
    }

    fn optimal_solution(&self) -> Point {
        Point::origin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_peak_at_origin() {
        let peak = PeakFitness::new();
        assert_relative_eq!(peak.evaluate(&peak.optimal_solution()), peak.optimal_fitness());
    }

    #[test]
    fn test_peak_values() {
        let peak = PeakFitness::new();
        assert_relative_eq!(peak.evaluate_xy(1.0, 0.0), 0.5);
        assert_relative_eq!(peak.evaluate_xy(1.0, 1.0), 1.0 / 3.0);
        assert_relative_eq!(peak.evaluate_xy(-3.0, 4.0), 1.0 / 26.0);
    }

    #[test]
    fn test_peak_is_positive_and_bounded() {
        let peak = PeakFitness::new();
        for &(x, y) in &[(1e6, -1e6), (0.0, 1e-300), (-5.0, 5.0)] {
            let f = peak.evaluate_xy(x, y);
            assert!(f > 0.0 && f <= 1.0, "f({}, {}) = {}", x, y, f);
        }
    }

    #[test]
    fn test_negated_sphere() {
        let sphere = NegatedSphere::new();
        assert_eq!(sphere.evaluate_xy(3.0, 4.0), -25.0);
        assert_eq!(sphere.evaluate(&sphere.optimal_solution()), 0.0);
        assert_eq!(sphere.name(), "NegatedSphere");
    }
}
