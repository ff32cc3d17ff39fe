//! Two-dimensional point genome
//!
//! A candidate solution is a single `(x, y)` coordinate.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::genome::bounds::Bounds;

/// A point in the plane
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// First coordinate
    pub x: f64,
    /// Second coordinate
    pub y: f64,
}

impl Point {
    /// Create a new point
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The origin
    pub fn origin() -> Self {
        Self::default()
    }

    /// Sample a point with both coordinates drawn uniformly from `[min, max)`
    ///
    /// Degenerate bounds (`min == max`) yield that single value without
    /// consuming randomness.
    pub fn generate<R: Rng>(rng: &mut R, bounds: &Bounds) -> Self {
        if bounds.min >= bounds.max {
            return Self::new(bounds.min, bounds.min);
        }
        Self {
            x: rng.gen_range(bounds.min..bounds.max),
            y: rng.gen_range(bounds.min..bounds.max),
        }
    }

    /// Squared Euclidean norm
    pub fn norm_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// Euclidean distance to another point
    pub fn distance(&self, other: &Self) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}
